//! Reinsurance metric calculators
//!
//! Every calculator is a pure function of its (already stressed) inputs and
//! returns an immutable record of the inputs consumed and the derived outputs.
//! Ratios over non-positive denominators come back as [`Metric::Undefined`].

mod layer;
mod portfolio;
mod proportional;
mod value;

pub use layer::{BurningCost, ExposureLossCost, Payback, RateOnLine, XolLayer};
pub use portfolio::{CombinedRatio, ReturnOnEquity};
pub use proportional::{QuotaShare, SurplusShare};
pub use value::{Metric, Undefined};

use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;

/// Every metric for one scenario snapshot, computed fresh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub xol: XolLayer,
    pub rol: RateOnLine,
    pub payback: Payback,
    pub burning_cost: BurningCost,
    pub quota_share: QuotaShare,
    pub surplus_share: SurplusShare,
    pub exposure: ExposureLossCost,
    pub combined_ratio: CombinedRatio,
    pub roe: ReturnOnEquity,
}

impl MetricSet {
    pub fn compute(scenario: &Scenario) -> Self {
        Self {
            xol: XolLayer::from_scenario(scenario),
            rol: RateOnLine::from_scenario(scenario),
            payback: Payback::from_scenario(scenario),
            burning_cost: BurningCost::from_scenario(scenario),
            quota_share: QuotaShare::from_scenario(scenario),
            surplus_share: SurplusShare::from_scenario(scenario),
            exposure: ExposureLossCost::from_scenario(scenario),
            combined_ratio: CombinedRatio::from_scenario(scenario),
            roe: ReturnOnEquity::from_scenario(scenario),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::scenario::ScenarioUpdate;
    use crate::stress::StressMode;
    use approx::assert_relative_eq;

    fn property_cat(mode: StressMode) -> Scenario {
        Scenario::new().apply_all([
            ScenarioUpdate::ApplyPreset(presets::property_cat()),
            ScenarioUpdate::SetStress(mode),
        ])
    }

    #[test]
    fn test_property_cat_metrics() {
        let m = MetricSet::compute(&property_cat(StressMode::Normal));
        assert_eq!(m.xol.payout, 15_000_000.0);
        assert_relative_eq!(m.rol.rol.to_f64(), 0.175, max_relative = 1e-12);
        assert_relative_eq!(m.payback.years.to_f64(), 3.5 / 1.8, max_relative = 1e-12);
        assert_relative_eq!(m.combined_ratio.combined.to_f64(), 11.0 / 12.0, max_relative = 1e-12);
        assert_relative_eq!(m.roe.roe.to_f64(), 0.08, max_relative = 1e-12);
        assert_relative_eq!(m.surplus_share.ceded_share, 0.8, max_relative = 1e-12);
    }

    #[test]
    fn test_cat_year_moves_only_loss_driven_metrics() {
        let normal = MetricSet::compute(&property_cat(StressMode::Normal));
        let cat = MetricSet::compute(&property_cat(StressMode::CatYear));

        // occurrence loss 33.75m: layer exhausted
        assert_eq!(cat.xol.payout, 20_000_000.0);
        assert_relative_eq!(cat.combined_ratio.combined.to_f64(), 1.15, max_relative = 1e-12);
        assert_relative_eq!(cat.quota_share.ceded_loss, 4_050_000.0, max_relative = 1e-12);
        assert_relative_eq!(cat.exposure.elr, 0.682, max_relative = 1e-12);

        // premium and expected loss (rol.expLoss) are not stressed
        assert_eq!(cat.rol, normal.rol);
        assert_eq!(cat.payback, normal.payback);
        assert_eq!(cat.roe, normal.roe);
        assert_eq!(cat.burning_cost, normal.burning_cost);
    }
}
