//! Raw input values and numeric coercion

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value as entered by the user: already numeric, or text pending parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce to a number, using `fallback` when the text is not numeric
    pub fn to_number(&self, fallback: f64) -> f64 {
        match self {
            RawValue::Number(v) if v.is_finite() => *v,
            RawValue::Number(_) => fallback,
            RawValue::Text(s) => coerce(s, fallback),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(v) => write!(f, "{}", v),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

/// Parse user text as a number
///
/// Thousands separators are stripped and surrounding whitespace ignored. Blank
/// text reads as 0. Anything that does not parse to a finite number returns
/// `fallback`.
pub fn coerce(text: &str, fallback: f64) -> f64 {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => fallback,
    }
}
