//! Number formatting for display
//!
//! Unavailable values always render as [`UNAVAILABLE`], never as 0 or blank.

use crate::decision::{CheckKind, DecisionCheck};
use crate::metrics::Metric;

/// Marker shown for undefined metrics
pub const UNAVAILABLE: &str = "—";

/// Money with thousands separators, prefixed by the currency label
///
/// Whole units from 1,000 upward, cents below.
pub fn fmt_money(value: impl Into<Metric>, currency: &str) -> String {
    match value.into().value() {
        Some(v) if v.is_finite() => {
            let decimals = if v.abs() >= 1_000.0 { 0 } else { 2 };
            format!("{} {}", currency, group_thousands(&format!("{:.*}", decimals, v)))
        }
        _ => UNAVAILABLE.to_string(),
    }
}

/// Ratio as a percentage with two decimals
pub fn fmt_pct(value: impl Into<Metric>) -> String {
    match value.into().value() {
        Some(v) if !v.is_nan() => format!("{:.2}%", v * 100.0),
        _ => UNAVAILABLE.to_string(),
    }
}

/// Years with two decimals
pub fn fmt_years(value: impl Into<Metric>) -> String {
    match value.into().value() {
        Some(v) if v.is_finite() => format!("{:.2} yrs", v),
        _ => UNAVAILABLE.to_string(),
    }
}

/// Detail line for a decision check, e.g. `17.50% vs target 18.00%`
pub fn check_detail(check: &DecisionCheck) -> String {
    match check.kind {
        CheckKind::RolVsTarget => {
            format!("{} vs target {}", fmt_pct(check.observed), fmt_pct(check.threshold))
        }
        CheckKind::PaybackVsMax => {
            format!("{} vs max {}", fmt_years(check.observed), fmt_years(check.threshold))
        }
        CheckKind::CededShareSanity => {
            format!("QS share {} (learning check)", fmt_pct(check.observed))
        }
        CheckKind::CombinedRatio => {
            format!("{} vs max {}", fmt_pct(check.observed), fmt_pct(check.threshold))
        }
        CheckKind::Roe => {
            format!("{} vs min {}", fmt_pct(check.observed), fmt_pct(check.threshold))
        }
    }
}

/// Insert `,` every three digits of the integer part
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}{}{}", sign, grouped, frac_part)
}
