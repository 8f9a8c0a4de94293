//! Stress grid: every stress mode for one scenario or for every preset
//!
//! Answers "which hurdle breaks first" by comparing each stressed verdict with
//! the unstressed one.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::decision::{self, CheckKind, Hurdles, Verdict};
use crate::metrics::MetricSet;
use crate::presets::PresetCatalog;
use crate::scenario::{Scenario, ScenarioUpdate};
use crate::stress::StressMode;

/// Metrics and verdict under one stress mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressOutcome {
    pub mode: StressMode,
    pub metrics: MetricSet,
    pub verdict: Verdict,
}

impl StressOutcome {
    pub fn evaluate(scenario: &Scenario, mode: StressMode) -> Self {
        let stressed = scenario.with_stress(mode);
        let metrics = MetricSet::compute(&stressed);
        let hurdles = Hurdles::from_scenario(&stressed);
        let verdict = decision::evaluate(stressed.structure(), &hurdles, &metrics);
        Self { mode, metrics, verdict }
    }
}

/// All stress modes for one scenario, in [`StressMode::ALL`] order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressReport {
    pub label: String,
    pub outcomes: Vec<StressOutcome>,
}

impl StressReport {
    pub fn outcome(&self, mode: StressMode) -> Option<&StressOutcome> {
        self.outcomes.iter().find(|o| o.mode == mode)
    }

    /// Checks that pass unstressed but fail under `mode`, in display order
    pub fn degraded(&self, mode: StressMode) -> Vec<CheckKind> {
        let base = self.outcome(StressMode::Normal);
        let (Some(base), Some(stressed)) = (base, self.outcome(mode)) else {
            return Vec::new();
        };
        stressed
            .verdict
            .checks
            .iter()
            .filter(|check| !check.passed)
            .filter(|check| base.verdict.check(check.kind).is_some_and(|b| b.passed))
            .map(|check| check.kind)
            .collect()
    }
}

/// Runs the stress grid against a preset catalogue
#[derive(Debug, Clone, Default)]
pub struct StressGrid {
    catalog: PresetCatalog,
}

impl StressGrid {
    pub fn new(catalog: PresetCatalog) -> Self {
        Self { catalog }
    }

    /// Every stress mode for one scenario
    pub fn run(&self, label: &str, scenario: &Scenario) -> StressReport {
        let outcomes = StressMode::ALL
            .as_slice()
            .par_iter()
            .map(|&mode| StressOutcome::evaluate(scenario, mode))
            .collect();
        StressReport {
            label: label.to_string(),
            outcomes,
        }
    }

    /// Every stress mode for every preset, each seeded into an empty scenario
    pub fn run_presets(&self) -> Vec<StressReport> {
        let presets: Vec<_> = self.catalog.iter().cloned().collect();
        log::info!("Running stress grid over {} presets", presets.len());
        presets
            .into_par_iter()
            .map(|preset| {
                let label = preset.id.clone();
                let scenario = Scenario::new().apply(ScenarioUpdate::ApplyPreset(preset));
                self.run(&label, &scenario)
            })
            .collect()
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }
}
