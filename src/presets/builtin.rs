//! Built-in learning presets (illustrative Bermuda-market numbers, not quotes)

use super::Preset;
use crate::inputs::FieldKey;
use crate::scenario::Structure;

/// Identifier of the preset seeded into a fresh session
pub const DEFAULT_PRESET_ID: &str = "bm_property_cat";

/// Property catastrophe occurrence XoL layer
pub fn property_cat() -> Preset {
    Preset {
        id: "bm_property_cat".to_string(),
        name: "Bermuda Property Cat (XoL layer)".to_string(),
        tags: vec!["Property cat".into(), "Occ XoL".into(), "Bermuda market framing".into()],
        values: vec![
            (FieldKey::XolLoss, 25_000_000.0),
            (FieldKey::XolAttach, 10_000_000.0),
            (FieldKey::XolLimit, 20_000_000.0),
            (FieldKey::RolPremium, 3_500_000.0),
            (FieldKey::RolLimit, 20_000_000.0),
            (FieldKey::RolExpLoss, 1_800_000.0),
            (FieldKey::BcLayerLosses, 9_000_000.0),
            (FieldKey::BcYears, 5.0),
            (FieldKey::BcPremium, 3_500_000.0),
            (FieldKey::BcLoad, 0.20),
            (FieldKey::CrLosses, 12_000_000.0),
            (FieldKey::CrEarnedPrem, 18_000_000.0),
            (FieldKey::CrExpenses, 4_500_000.0),
            (FieldKey::RoeNetIncome, 2_400_000.0),
            (FieldKey::RoeEquity, 30_000_000.0),
            (FieldKey::QsGwp, 18_000_000.0),
            (FieldKey::QsShare, 0.25),
            (FieldKey::QsLosses, 12_000_000.0),
            (FieldKey::SsSumInsured, 10_000_000.0),
            (FieldKey::SsRetention, 2_000_000.0),
            (FieldKey::SsLines, 4.0),
            (FieldKey::SsLoss, 1_500_000.0),
            (FieldKey::ElcSubPrem, 18_000_000.0),
            (FieldKey::ElcElr, 0.62),
            (FieldKey::ElcLayerFactor, 0.14),
            (FieldKey::UwTargetRol, 0.18),
            (FieldKey::UwMaxPayback, 2.5),
            (FieldKey::UwMaxCr, 1.00),
            (FieldKey::UwMinRoe, 0.10),
        ],
        structure: Some(Structure::Xol),
    }
}

/// Casualty XoL with attritional and large-loss experience
pub fn casualty_xol() -> Preset {
    Preset {
        id: "bm_casualty_xol".to_string(),
        name: "Bermuda Casualty (XoL, attritional + large loss)".to_string(),
        tags: vec!["Casualty".into(), "XoL".into(), "Long-tail lens".into()],
        values: vec![
            (FieldKey::XolLoss, 6_000_000.0),
            (FieldKey::XolAttach, 2_000_000.0),
            (FieldKey::XolLimit, 5_000_000.0),
            (FieldKey::RolPremium, 950_000.0),
            (FieldKey::RolLimit, 5_000_000.0),
            (FieldKey::RolExpLoss, 550_000.0),
            (FieldKey::BcLayerLosses, 2_800_000.0),
            (FieldKey::BcYears, 7.0),
            (FieldKey::BcPremium, 950_000.0),
            (FieldKey::BcLoad, 0.25),
            (FieldKey::CrLosses, 7_200_000.0),
            (FieldKey::CrEarnedPrem, 9_000_000.0),
            (FieldKey::CrExpenses, 2_400_000.0),
            (FieldKey::RoeNetIncome, 700_000.0),
            (FieldKey::RoeEquity, 8_000_000.0),
            (FieldKey::QsGwp, 9_000_000.0),
            (FieldKey::QsShare, 0.15),
            (FieldKey::QsLosses, 7_200_000.0),
            (FieldKey::SsSumInsured, 5_000_000.0),
            (FieldKey::SsRetention, 1_000_000.0),
            (FieldKey::SsLines, 5.0),
            (FieldKey::SsLoss, 900_000.0),
            (FieldKey::ElcSubPrem, 9_000_000.0),
            (FieldKey::ElcElr, 0.80),
            (FieldKey::ElcLayerFactor, 0.10),
            (FieldKey::UwTargetRol, 0.20),
            (FieldKey::UwMaxPayback, 3.0),
            (FieldKey::UwMaxCr, 1.02),
            (FieldKey::UwMinRoe, 0.08),
        ],
        structure: Some(Structure::Xol),
    }
}

/// Quota share portfolio support; leaves the layer fields untouched
pub fn quota_share_portfolio() -> Preset {
    Preset {
        id: "bm_qs_portfolio".to_string(),
        name: "Bermuda Quota Share (portfolio support)".to_string(),
        tags: vec!["Quota share".into(), "Capital relief / growth".into()],
        values: vec![
            (FieldKey::QsGwp, 25_000_000.0),
            (FieldKey::QsShare, 0.30),
            (FieldKey::QsLosses, 14_000_000.0),
            (FieldKey::CrLosses, 14_000_000.0),
            (FieldKey::CrEarnedPrem, 22_000_000.0),
            (FieldKey::CrExpenses, 5_500_000.0),
            (FieldKey::RoeNetIncome, 1_500_000.0),
            (FieldKey::RoeEquity, 15_000_000.0),
            (FieldKey::ElcSubPrem, 25_000_000.0),
            (FieldKey::ElcElr, 0.58),
            (FieldKey::ElcLayerFactor, 1.00),
            (FieldKey::UwTargetRol, 0.00),
            (FieldKey::UwMaxPayback, 0.0),
            (FieldKey::UwMaxCr, 0.98),
            (FieldKey::UwMinRoe, 0.10),
        ],
        structure: Some(Structure::QuotaShare),
    }
}

/// All built-in presets in menu order
pub fn builtin_presets() -> Vec<Preset> {
    vec![property_cat(), casualty_xol(), quota_share_portfolio()]
}
