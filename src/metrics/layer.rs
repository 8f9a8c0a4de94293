//! Non-proportional layer metrics: payout, rate on line, payback, burning cost
//! and exposure-rated loss cost

use serde::{Deserialize, Serialize};

use super::value::{Metric, Undefined};
use crate::inputs::FieldKey;
use crate::scenario::Scenario;

/// Excess-of-loss layer recovery for a single occurrence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XolLayer {
    pub loss: f64,
    pub attach: f64,
    pub limit: f64,
    /// `min(max(loss - attach, 0), max(limit, 0))`
    pub payout: f64,
}

impl XolLayer {
    pub fn calculate(loss: f64, attach: f64, limit: f64) -> Self {
        let payout = (loss - attach).max(0.0).min(limit.max(0.0));
        Self { loss, attach, limit, payout }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(
            scenario.get(FieldKey::XolLoss),
            scenario.get(FieldKey::XolAttach),
            scenario.get(FieldKey::XolLimit),
        )
    }
}

/// Rate on line: premium as a share of layer limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateOnLine {
    pub premium: f64,
    pub limit: f64,
    pub rol: Metric,
}

impl RateOnLine {
    pub fn calculate(premium: f64, limit: f64) -> Self {
        Self {
            premium,
            limit,
            rol: Metric::ratio(premium, limit, Undefined::NonPositiveLimit),
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(scenario.get(FieldKey::RolPremium), scenario.get(FieldKey::RolLimit))
    }
}

/// Years of premium needed to pay one expected annual loss
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payback {
    pub premium: f64,
    pub expected_loss: f64,
    pub years: Metric,
}

impl Payback {
    pub fn calculate(premium: f64, expected_loss: f64) -> Self {
        Self {
            premium,
            expected_loss,
            years: Metric::ratio(premium, expected_loss, Undefined::NonPositiveExpectedLoss),
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(scenario.get(FieldKey::RolPremium), scenario.get(FieldKey::RolExpLoss))
    }
}

/// Annualised historical layer losses compared to premium
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurningCost {
    pub layer_losses: f64,
    pub years: f64,
    pub premium: f64,
    pub load: f64,
    /// `layer_losses / years`
    pub burning_cost: Metric,
    /// `burning_cost / premium`
    pub bc_rate: Metric,
    /// `bc_rate * (1 + load)`
    pub loaded_rate: Metric,
}

impl BurningCost {
    pub fn calculate(layer_losses: f64, years: f64, premium: f64, load: f64) -> Self {
        let burning_cost = Metric::ratio(layer_losses, years, Undefined::NonPositiveYears);
        let bc_rate = if premium > 0.0 {
            burning_cost.per(premium, Undefined::NonPositivePremium)
        } else {
            Metric::Undefined(Undefined::NonPositivePremium)
        };
        let loaded_rate = bc_rate.map(|rate| rate * (1.0 + load));
        Self {
            layer_losses,
            years,
            premium,
            load,
            burning_cost,
            bc_rate,
            loaded_rate,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(
            scenario.get(FieldKey::BcLayerLosses),
            scenario.get(FieldKey::BcYears),
            scenario.get(FieldKey::BcPremium),
            scenario.get(FieldKey::BcLoad),
        )
    }
}

/// Expected layer loss from subject premium when history is thin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureLossCost {
    pub subject_premium: f64,
    pub elr: f64,
    pub layer_factor: f64,
    pub expected_gross_loss: f64,
    pub expected_layer_loss: f64,
}

impl ExposureLossCost {
    pub fn calculate(subject_premium: f64, elr: f64, layer_factor: f64) -> Self {
        let expected_gross_loss = subject_premium * elr;
        Self {
            subject_premium,
            elr,
            layer_factor,
            expected_gross_loss,
            expected_layer_loss: expected_gross_loss * layer_factor,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(
            scenario.get(FieldKey::ElcSubPrem),
            scenario.get(FieldKey::ElcElr),
            scenario.get(FieldKey::ElcLayerFactor),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_xol_payout_through_layer() {
        let layer = XolLayer::calculate(25_000_000.0, 10_000_000.0, 20_000_000.0);
        assert_eq!(layer.payout, 15_000_000.0);
    }

    #[test]
    fn test_xol_payout_bounds() {
        // below attachment
        assert_eq!(XolLayer::calculate(5.0, 10.0, 20.0).payout, 0.0);
        // exhausts the limit
        assert_eq!(XolLayer::calculate(100.0, 10.0, 20.0).payout, 20.0);
        // non-positive limit pays nothing
        assert_eq!(XolLayer::calculate(100.0, 10.0, 0.0).payout, 0.0);
        assert_eq!(XolLayer::calculate(100.0, 10.0, -5.0).payout, 0.0);
    }

    #[test]
    fn test_rol_and_payback() {
        let rol = RateOnLine::calculate(3_500_000.0, 20_000_000.0);
        assert_relative_eq!(rol.rol.to_f64(), 0.175, max_relative = 1e-12);

        let payback = Payback::calculate(3_500_000.0, 1_800_000.0);
        assert_relative_eq!(payback.years.to_f64(), 1.944_444_444_444, max_relative = 1e-9);
    }

    #[test]
    fn test_rol_and_payback_undefined() {
        assert_eq!(
            RateOnLine::calculate(1.0, 0.0).rol,
            Metric::Undefined(Undefined::NonPositiveLimit)
        );
        assert_eq!(
            Payback::calculate(1.0, -1.0).years,
            Metric::Undefined(Undefined::NonPositiveExpectedLoss)
        );
    }

    #[test]
    fn test_burning_cost() {
        let bc = BurningCost::calculate(9_000_000.0, 5.0, 3_500_000.0, 0.20);
        assert_relative_eq!(bc.burning_cost.to_f64(), 1_800_000.0, max_relative = 1e-12);
        assert_relative_eq!(bc.bc_rate.to_f64(), 0.514_285_714_285, max_relative = 1e-9);
        assert_relative_eq!(bc.loaded_rate.to_f64(), 0.617_142_857_142, max_relative = 1e-9);
    }

    #[test]
    fn test_burning_cost_propagates_undefined() {
        let no_years = BurningCost::calculate(9_000_000.0, 0.0, 3_500_000.0, 0.20);
        assert_eq!(no_years.burning_cost, Metric::Undefined(Undefined::NonPositiveYears));
        assert_eq!(no_years.loaded_rate, Metric::Undefined(Undefined::NonPositiveYears));

        let no_premium = BurningCost::calculate(9_000_000.0, 5.0, 0.0, 0.20);
        assert!(no_premium.burning_cost.is_defined());
        assert_eq!(no_premium.bc_rate, Metric::Undefined(Undefined::NonPositivePremium));
        assert_eq!(no_premium.loaded_rate, Metric::Undefined(Undefined::NonPositivePremium));
    }

    #[test]
    fn test_exposure_loss_cost() {
        let elc = ExposureLossCost::calculate(18_000_000.0, 0.62, 0.14);
        assert_relative_eq!(elc.expected_gross_loss, 11_160_000.0, max_relative = 1e-12);
        assert_relative_eq!(elc.expected_layer_loss, 1_562_400.0, max_relative = 1e-12);
    }
}
