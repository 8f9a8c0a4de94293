//! Input field catalogue and raw value coercion

mod field;
mod raw;

pub use field::{FieldClass, FieldKey, STRUCTURE_KEY};
pub use raw::{coerce, RawValue};
