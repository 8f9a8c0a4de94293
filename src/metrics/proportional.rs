//! Proportional treaties: quota share and surplus share

use serde::{Deserialize, Serialize};

use crate::inputs::FieldKey;
use crate::scenario::Scenario;
use crate::stress::clamp;

/// Fixed share of premium and losses ceded
///
/// The share is taken as entered; values outside [0, 1] are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotaShare {
    pub gwp: f64,
    pub share: f64,
    pub losses: f64,
    pub ceded_premium: f64,
    pub ceded_loss: f64,
    pub net_premium: f64,
    pub net_loss: f64,
}

impl QuotaShare {
    pub fn calculate(gwp: f64, share: f64, losses: f64) -> Self {
        let ceded_premium = gwp * share;
        let ceded_loss = losses * share;
        Self {
            gwp,
            share,
            losses,
            ceded_premium,
            ceded_loss,
            net_premium: gwp - ceded_premium,
            net_loss: losses - ceded_loss,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(
            scenario.get(FieldKey::QsGwp),
            scenario.get(FieldKey::QsShare),
            scenario.get(FieldKey::QsLosses),
        )
    }
}

/// Cession that varies with policy size relative to a fixed retention
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurplusShare {
    pub sum_insured: f64,
    pub retention: f64,
    pub lines: f64,
    pub loss: f64,
    /// Treaty capacity: `retention * lines`
    pub max_ceded: f64,
    pub ceded_share: f64,
    pub ceded_loss: f64,
    pub net_loss: f64,
}

impl SurplusShare {
    pub fn calculate(sum_insured: f64, retention: f64, lines: f64, loss: f64) -> Self {
        let max_ceded = retention * lines;
        let ceded_share = if sum_insured > 0.0 {
            clamp((sum_insured - retention) / sum_insured, 0.0, max_ceded / sum_insured)
        } else {
            0.0
        };
        let ceded_loss = loss * ceded_share;
        Self {
            sum_insured,
            retention,
            lines,
            loss,
            max_ceded,
            ceded_share,
            ceded_loss,
            net_loss: loss - ceded_loss,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(
            scenario.get(FieldKey::SsSumInsured),
            scenario.get(FieldKey::SsRetention),
            scenario.get(FieldKey::SsLines),
            scenario.get(FieldKey::SsLoss),
        )
    }
}
