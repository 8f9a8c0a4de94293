//! UW Companion - offline reinsurance underwriting calculator
//!
//! This library provides:
//! - Closed-form layer metrics (XoL payout, rate on line, payback, burning cost,
//!   exposure loss cost)
//! - Proportional treaty metrics (quota share, surplus share)
//! - Portfolio metrics (combined ratio, return on equity)
//! - Stress scenarios (cat year, bad development) applied to inputs before calculation
//! - A hurdle-based decision tool scoring a scenario as PASS / REVIEW / DECLINE
//! - Presets, session persistence and text reports around the calculation core

pub mod decision;
pub mod error;
pub mod grid;
pub mod inputs;
pub mod metrics;
pub mod presets;
pub mod report;
pub mod scenario;
pub mod session;
pub mod stress;

// Re-export commonly used types
pub use decision::{decide, evaluate, Hurdles, Outcome, Verdict};
pub use error::CompanionError;
pub use grid::{StressGrid, StressReport};
pub use inputs::{FieldKey, RawValue};
pub use metrics::{Metric, MetricSet};
pub use presets::{Preset, PresetCatalog};
pub use scenario::{Scenario, ScenarioUpdate, Structure};
pub use session::{LocalStore, Session, Tab};
pub use stress::StressMode;
