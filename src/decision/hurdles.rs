//! Underwriting hurdles the decision tool grades against

use serde::{Deserialize, Serialize};

use crate::inputs::FieldKey;
use crate::scenario::Scenario;

/// Thresholds for the four graded checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hurdles {
    /// Highest acceptable rate on line
    pub target_rol: f64,
    /// Longest acceptable payback in years
    pub max_payback: f64,
    /// Highest acceptable combined ratio
    pub max_cr: f64,
    /// Lowest acceptable return on equity
    pub min_roe: f64,
}

impl Hurdles {
    /// Hurdles as entered; never stressed
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            target_rol: scenario.get(FieldKey::UwTargetRol),
            max_payback: scenario.get(FieldKey::UwMaxPayback),
            max_cr: scenario.get(FieldKey::UwMaxCr),
            min_roe: scenario.get(FieldKey::UwMinRoe),
        }
    }
}

impl Default for Hurdles {
    fn default() -> Self {
        Self {
            target_rol: FieldKey::UwTargetRol.default_value(),
            max_payback: FieldKey::UwMaxPayback.default_value(),
            max_cr: FieldKey::UwMaxCr.default_value(),
            min_roe: FieldKey::UwMinRoe.default_value(),
        }
    }
}
