//! Closed catalogue of scenario input fields
//!
//! Each field carries its namespaced key, its default, and its stress
//! classification as static metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompanionError;

/// How a field responds to the stress transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldClass {
    /// Key contains the lowercase substring `loss`; scaled by the loss multiplier
    LossLike,
    /// Portfolio expenses; scaled only under bad development
    Expense,
    /// Expected loss ratio; scaled then clamped to [0, 0.999]
    LossRatio,
    /// Never stressed
    Plain,
}

/// Every numeric input the calculators read
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    // XoL layer
    XolLoss,
    XolAttach,
    XolLimit,
    // Rate on line and payback
    RolPremium,
    RolLimit,
    RolExpLoss,
    // Burning cost
    BcLayerLosses,
    BcYears,
    BcPremium,
    BcLoad,
    // Quota share
    QsGwp,
    QsShare,
    QsLosses,
    // Surplus share
    SsSumInsured,
    SsRetention,
    SsLines,
    SsLoss,
    // Exposure loss cost
    ElcSubPrem,
    ElcElr,
    ElcLayerFactor,
    // Combined ratio
    CrLosses,
    CrEarnedPrem,
    CrExpenses,
    // Return on equity
    RoeNetIncome,
    RoeEquity,
    // Decision hurdles
    UwTargetRol,
    UwMaxPayback,
    UwMaxCr,
    UwMinRoe,
}

impl FieldKey {
    /// All fields in display order
    pub const ALL: [FieldKey; 29] = [
        FieldKey::XolLoss,
        FieldKey::XolAttach,
        FieldKey::XolLimit,
        FieldKey::RolPremium,
        FieldKey::RolLimit,
        FieldKey::RolExpLoss,
        FieldKey::BcLayerLosses,
        FieldKey::BcYears,
        FieldKey::BcPremium,
        FieldKey::BcLoad,
        FieldKey::QsGwp,
        FieldKey::QsShare,
        FieldKey::QsLosses,
        FieldKey::SsSumInsured,
        FieldKey::SsRetention,
        FieldKey::SsLines,
        FieldKey::SsLoss,
        FieldKey::ElcSubPrem,
        FieldKey::ElcElr,
        FieldKey::ElcLayerFactor,
        FieldKey::CrLosses,
        FieldKey::CrEarnedPrem,
        FieldKey::CrExpenses,
        FieldKey::RoeNetIncome,
        FieldKey::RoeEquity,
        FieldKey::UwTargetRol,
        FieldKey::UwMaxPayback,
        FieldKey::UwMaxCr,
        FieldKey::UwMinRoe,
    ];

    /// Namespaced storage key, e.g. `xol.loss`
    pub fn key(&self) -> &'static str {
        match self {
            FieldKey::XolLoss => "xol.loss",
            FieldKey::XolAttach => "xol.attach",
            FieldKey::XolLimit => "xol.limit",
            FieldKey::RolPremium => "rol.premium",
            FieldKey::RolLimit => "rol.limit",
            FieldKey::RolExpLoss => "rol.expLoss",
            FieldKey::BcLayerLosses => "bc.layerLosses",
            FieldKey::BcYears => "bc.years",
            FieldKey::BcPremium => "bc.premium",
            FieldKey::BcLoad => "bc.load",
            FieldKey::QsGwp => "qs.gwp",
            FieldKey::QsShare => "qs.share",
            FieldKey::QsLosses => "qs.losses",
            FieldKey::SsSumInsured => "ss.sumInsured",
            FieldKey::SsRetention => "ss.retention",
            FieldKey::SsLines => "ss.lines",
            FieldKey::SsLoss => "ss.loss",
            FieldKey::ElcSubPrem => "elc.subPrem",
            FieldKey::ElcElr => "elc.elr",
            FieldKey::ElcLayerFactor => "elc.layerFactor",
            FieldKey::CrLosses => "cr.losses",
            FieldKey::CrEarnedPrem => "cr.earnedPrem",
            FieldKey::CrExpenses => "cr.expenses",
            FieldKey::RoeNetIncome => "roe.netIncome",
            FieldKey::RoeEquity => "roe.equity",
            FieldKey::UwTargetRol => "uw.targetROL",
            FieldKey::UwMaxPayback => "uw.maxPayback",
            FieldKey::UwMaxCr => "uw.maxCR",
            FieldKey::UwMinRoe => "uw.minROE",
        }
    }

    /// Value used when the scenario holds nothing for this field
    pub fn default_value(&self) -> f64 {
        match self {
            FieldKey::BcYears => 1.0,
            FieldKey::BcLoad => 0.20,
            FieldKey::QsShare => 0.25,
            FieldKey::ElcElr => 0.60,
            FieldKey::ElcLayerFactor => 0.10,
            FieldKey::UwTargetRol => 0.18,
            FieldKey::UwMaxPayback => 2.5,
            FieldKey::UwMaxCr => 1.00,
            FieldKey::UwMinRoe => 0.10,
            _ => 0.0,
        }
    }

    /// Stress classification
    ///
    /// Loss-like is exactly the set of keys containing the case-sensitive
    /// substring `loss`, so `rol.expLoss` and `bc.layerLosses` are plain.
    pub fn class(&self) -> FieldClass {
        match self {
            FieldKey::XolLoss | FieldKey::QsLosses | FieldKey::SsLoss | FieldKey::CrLosses => {
                FieldClass::LossLike
            }
            FieldKey::CrExpenses => FieldClass::Expense,
            FieldKey::ElcElr => FieldClass::LossRatio,
            _ => FieldClass::Plain,
        }
    }

    /// Whether reads go through the stress transform
    ///
    /// Hurdles, the burning cost load and the quota share are read raw. None of
    /// them is stress-sensitive, but their coercion fallback differs: a
    /// non-numeric string reads as 0 rather than the field default.
    pub fn is_stressed(&self) -> bool {
        !matches!(
            self,
            FieldKey::BcLoad
                | FieldKey::QsShare
                | FieldKey::UwTargetRol
                | FieldKey::UwMaxPayback
                | FieldKey::UwMaxCr
                | FieldKey::UwMinRoe
        )
    }

    /// Human-readable input label
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::XolLoss => "Loss Amount (Occurrence)",
            FieldKey::XolAttach => "Attachment",
            FieldKey::XolLimit => "Limit",
            FieldKey::RolPremium => "Reinsurance Premium",
            FieldKey::RolLimit => "Limit",
            FieldKey::RolExpLoss => "Expected Annual Loss (layer)",
            FieldKey::BcLayerLosses => "Historical Losses in Layer (sum)",
            FieldKey::BcYears => "Exposure Period (years)",
            FieldKey::BcPremium => "Layer Premium",
            FieldKey::BcLoad => "Load Factor (0-1)",
            FieldKey::QsGwp => "Gross Written Premium (GWP)",
            FieldKey::QsShare => "Quota Share % (0-1)",
            FieldKey::QsLosses => "Gross Losses",
            FieldKey::SsSumInsured => "Policy Sum Insured",
            FieldKey::SsRetention => "Retention (Net line)",
            FieldKey::SsLines => "Number of Lines",
            FieldKey::SsLoss => "Policy Loss",
            FieldKey::ElcSubPrem => "Subject Premium",
            FieldKey::ElcElr => "Expected Loss Ratio (ELR)",
            FieldKey::ElcLayerFactor => "Layer Factor",
            FieldKey::CrLosses => "Losses Incurred",
            FieldKey::CrEarnedPrem => "Earned Premium",
            FieldKey::CrExpenses => "Expenses",
            FieldKey::RoeNetIncome => "Net Income",
            FieldKey::RoeEquity => "Equity / Capital",
            FieldKey::UwTargetRol => "Target ROL (max)",
            FieldKey::UwMaxPayback => "Max Payback (years)",
            FieldKey::UwMaxCr => "Max Combined Ratio",
            FieldKey::UwMinRoe => "Min ROE",
        }
    }

    /// Look up a field by its namespaced key
    pub fn parse(key: &str) -> Result<Self, CompanionError> {
        FieldKey::ALL
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .ok_or_else(|| CompanionError::UnknownField(key.to_string()))
    }
}

impl FromStr for FieldKey {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::parse(s)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key of the non-numeric structure selector in persisted inputs and presets
pub const STRUCTURE_KEY: &str = "uw.useStructure";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_loss_like_matches_case_sensitive_substring() {
        for field in FieldKey::ALL {
            let by_substring = field.key().contains("loss") || field.key().contains("losses");
            assert_eq!(
                field.class() == FieldClass::LossLike,
                by_substring,
                "classification mismatch for {}",
                field
            );
        }
    }

    #[test]
    fn test_capitalised_loss_keys_are_plain() {
        assert_eq!(FieldKey::RolExpLoss.class(), FieldClass::Plain);
        assert_eq!(FieldKey::BcLayerLosses.class(), FieldClass::Plain);
    }

    #[test]
    fn test_keys_unique_and_parse_back() {
        let keys: HashSet<_> = FieldKey::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), FieldKey::ALL.len());

        for field in FieldKey::ALL {
            assert_eq!(FieldKey::parse(field.key()).unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FieldKey::parse("xol.Loss").is_err());
        assert!(FieldKey::parse(STRUCTURE_KEY).is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FieldKey::BcYears.default_value(), 1.0);
        assert_eq!(FieldKey::ElcElr.default_value(), 0.60);
        assert_eq!(FieldKey::UwMaxPayback.default_value(), 2.5);
        assert_eq!(FieldKey::XolLoss.default_value(), 0.0);
    }
}
