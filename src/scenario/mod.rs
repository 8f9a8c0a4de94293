//! Scenario snapshots: input values, structure selection and stress mode

mod snapshot;
mod structure;

pub use snapshot::{Scenario, ScenarioUpdate};
pub use structure::Structure;
