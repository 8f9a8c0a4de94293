//! Stress scenarios applied to raw inputs before calculation
//!
//! Each read starts from the unstressed stored value, so switching modes never
//! compounds a previous adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompanionError;
use crate::inputs::{FieldClass, FieldKey};

/// Loss multiplier in a catastrophe year
pub const CAT_LOSS_FACTOR: f64 = 1.35;
/// ELR multiplier in a catastrophe year
pub const CAT_ELR_FACTOR: f64 = 1.10;
/// Loss multiplier under adverse development
pub const BAD_DEV_LOSS_FACTOR: f64 = 1.18;
/// Expense multiplier under adverse development
pub const BAD_DEV_EXPENSE_FACTOR: f64 = 1.06;
/// ELR multiplier under adverse development
pub const BAD_DEV_ELR_FACTOR: f64 = 1.08;
/// Upper bound for a stressed expected loss ratio
pub const MAX_STRESSED_ELR: f64 = 0.999;

/// Scenario-wide stress selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StressMode {
    #[default]
    Normal,
    /// Severity and occurrence losses pushed higher, premium unchanged
    CatYear,
    /// Loss ratio creep with modest expense creep
    BadDevelopment,
}

impl StressMode {
    pub const ALL: [StressMode; 3] = [
        StressMode::Normal,
        StressMode::CatYear,
        StressMode::BadDevelopment,
    ];

    /// Persisted identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            StressMode::Normal => "normal",
            StressMode::CatYear => "cat",
            StressMode::BadDevelopment => "baddev",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressMode::Normal => "Normal",
            StressMode::CatYear => "Cat year",
            StressMode::BadDevelopment => "Bad development",
        }
    }

    /// Parse a persisted identifier, treating anything unrecognised as `Normal`
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognised stress mode {:?}, using normal", s);
            StressMode::Normal
        })
    }
}

impl FromStr for StressMode {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(StressMode::Normal),
            "cat" => Ok(StressMode::CatYear),
            "baddev" => Ok(StressMode::BadDevelopment),
            other => Err(CompanionError::UnknownStressMode(other.to_string())),
        }
    }
}

impl fmt::Display for StressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stressed value of `field` under `mode`
pub fn apply(field: FieldKey, value: f64, mode: StressMode) -> f64 {
    match (mode, field.class()) {
        (StressMode::Normal, _) => value,
        (StressMode::CatYear, FieldClass::LossLike) => value * CAT_LOSS_FACTOR,
        (StressMode::CatYear, FieldClass::LossRatio) => {
            clamp(value * CAT_ELR_FACTOR, 0.0, MAX_STRESSED_ELR)
        }
        (StressMode::BadDevelopment, FieldClass::LossLike) => value * BAD_DEV_LOSS_FACTOR,
        (StressMode::BadDevelopment, FieldClass::Expense) => value * BAD_DEV_EXPENSE_FACTOR,
        (StressMode::BadDevelopment, FieldClass::LossRatio) => {
            clamp(value * BAD_DEV_ELR_FACTOR, 0.0, MAX_STRESSED_ELR)
        }
        _ => value,
    }
}

/// `max(lo, min(hi, x))`; unlike `f64::clamp` this never panics when `lo > hi`
pub(crate) fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(x))
}
