//! Metric values that may be undefined
//!
//! A ratio over a non-positive denominator is not an error: it yields
//! `Metric::Undefined`, which flows through downstream formulas and never
//! satisfies a hurdle comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a metric could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Undefined {
    NonPositiveLimit,
    NonPositiveExpectedLoss,
    NonPositiveYears,
    NonPositivePremium,
    NonPositiveEarnedPremium,
    NonPositiveEquity,
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Undefined::NonPositiveLimit => "limit is not positive",
            Undefined::NonPositiveExpectedLoss => "expected annual loss is not positive",
            Undefined::NonPositiveYears => "exposure period is not positive",
            Undefined::NonPositivePremium => "premium is not positive",
            Undefined::NonPositiveEarnedPremium => "earned premium is not positive",
            Undefined::NonPositiveEquity => "equity is not positive",
        };
        f.write_str(reason)
    }
}

/// A computed number, or the reason it is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Value(f64),
    Undefined(Undefined),
}

impl Metric {
    /// `numerator / denominator`, undefined unless the denominator is positive
    pub fn ratio(numerator: f64, denominator: f64, reason: Undefined) -> Self {
        if denominator > 0.0 {
            Metric::Value(numerator / denominator)
        } else {
            Metric::Undefined(reason)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Metric::Value(_))
    }

    /// Numeric view with NaN standing in for undefined
    pub fn to_f64(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Metric::Value(v) => Metric::Value(f(v)),
            undefined => undefined,
        }
    }

    /// Combine two metrics; the first undefined operand wins
    pub fn zip_with(self, other: Metric, f: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self, other) {
            (Metric::Value(a), Metric::Value(b)) => Metric::Value(f(a, b)),
            (Metric::Undefined(r), _) | (_, Metric::Undefined(r)) => Metric::Undefined(r),
        }
    }

    /// Divide by a plain denominator, undefined unless it is positive
    pub fn per(self, denominator: f64, reason: Undefined) -> Self {
        match self {
            Metric::Value(v) => Metric::ratio(v, denominator, reason),
            undefined => undefined,
        }
    }

    /// `self <= threshold`; false when undefined or NaN
    pub fn at_most(&self, threshold: f64) -> bool {
        matches!(self, Metric::Value(v) if *v <= threshold)
    }

    /// `self >= threshold`; false when undefined or NaN
    pub fn at_least(&self, threshold: f64) -> bool {
        matches!(self, Metric::Value(v) if *v >= threshold)
    }
}

impl From<f64> for Metric {
    fn from(v: f64) -> Self {
        Metric::Value(v)
    }
}
