//! Hurdle checks, scoring and verdict

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Hurdles;
use crate::metrics::{Metric, MetricSet};
use crate::scenario::{Scenario, Structure};

/// Denominator shown with every score
///
/// Quota share only grades three checks but is still shown out of four, so a
/// quota share can never reach `Pass`.
pub const MAX_SCORE: u8 = 4;
/// Lowest score that passes
pub const PASS_SCORE: u8 = 4;
/// Lowest score that is sent for review rather than declined
pub const REVIEW_SCORE: u8 = 2;
/// Quota share cessions at or above this are flagged
pub const QS_SHARE_CEILING: f64 = 0.6;

/// Final recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Pass,
    Review,
    Decline,
}

impl Outcome {
    pub fn from_score(score: u8) -> Self {
        if score >= PASS_SCORE {
            Outcome::Pass
        } else if score >= REVIEW_SCORE {
            Outcome::Review
        } else {
            Outcome::Decline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Review => "REVIEW",
            Outcome::Decline => "DECLINE",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which hurdle a check grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    RolVsTarget,
    PaybackVsMax,
    CededShareSanity,
    CombinedRatio,
    Roe,
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::RolVsTarget => "ROL vs target",
            CheckKind::PaybackVsMax => "Payback vs max",
            CheckKind::CededShareSanity => "Ceded share sanity",
            CheckKind::CombinedRatio => "Combined Ratio",
            CheckKind::Roe => "ROE",
        }
    }
}

/// One graded hurdle: the observed metric, the threshold, and whether it held
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionCheck {
    pub kind: CheckKind,
    pub passed: bool,
    pub observed: Metric,
    pub threshold: f64,
}

impl DecisionCheck {
    /// Passes when `observed <= max`
    fn at_most(kind: CheckKind, observed: Metric, max: f64) -> Self {
        Self { kind, passed: observed.at_most(max), observed, threshold: max }
    }

    /// Passes when `observed >= min`
    fn at_least(kind: CheckKind, observed: Metric, min: f64) -> Self {
        Self { kind, passed: observed.at_least(min), observed, threshold: min }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Scored recommendation for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub structure: Structure,
    pub score: u8,
    /// Display order: structure checks first, then portfolio checks
    pub checks: Vec<DecisionCheck>,
    pub outcome: Outcome,
}

impl Verdict {
    /// Score is the number of passing checks, independent of their order
    pub fn from_checks(structure: Structure, checks: Vec<DecisionCheck>) -> Self {
        let score = checks.iter().filter(|c| c.passed).count() as u8;
        Self {
            structure,
            score,
            checks,
            outcome: Outcome::from_score(score),
        }
    }

    pub fn max_score(&self) -> u8 {
        MAX_SCORE
    }

    pub fn check(&self, kind: CheckKind) -> Option<&DecisionCheck> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    pub fn failed(&self) -> impl Iterator<Item = &DecisionCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Grade `metrics` against `hurdles` for the chosen structure
pub fn evaluate(structure: Structure, hurdles: &Hurdles, metrics: &MetricSet) -> Verdict {
    let mut checks = Vec::with_capacity(4);

    match structure {
        Structure::Xol => {
            checks.push(DecisionCheck::at_most(
                CheckKind::RolVsTarget,
                metrics.rol.rol,
                hurdles.target_rol,
            ));
            checks.push(DecisionCheck::at_most(
                CheckKind::PaybackVsMax,
                metrics.payback.years,
                hurdles.max_payback,
            ));
        }
        Structure::QuotaShare => {
            let share = metrics.quota_share.share;
            checks.push(DecisionCheck {
                kind: CheckKind::CededShareSanity,
                passed: share > 0.0 && share < QS_SHARE_CEILING,
                observed: Metric::Value(share),
                threshold: QS_SHARE_CEILING,
            });
        }
    }

    checks.push(DecisionCheck::at_most(
        CheckKind::CombinedRatio,
        metrics.combined_ratio.combined,
        hurdles.max_cr,
    ));
    checks.push(DecisionCheck::at_least(CheckKind::Roe, metrics.roe.roe, hurdles.min_roe));

    let verdict = Verdict::from_checks(structure, checks);
    log::debug!("{} verdict: {} ({}/{})", structure, verdict.outcome, verdict.score, MAX_SCORE);
    verdict
}

/// Compute every metric for the snapshot and grade it
pub fn decide(scenario: &Scenario) -> Verdict {
    let metrics = MetricSet::compute(scenario);
    evaluate(scenario.structure(), &Hurdles::from_scenario(scenario), &metrics)
}
