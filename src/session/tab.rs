//! Calculator pages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompanionError;

/// One page of the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Decision,
    Xol,
    Rol,
    BurningCost,
    QuotaShare,
    SurplusShare,
    ExposureLossCost,
    CombinedRatio,
    Roe,
}

impl Tab {
    pub const ALL: [Tab; 9] = [
        Tab::Decision,
        Tab::Xol,
        Tab::Rol,
        Tab::BurningCost,
        Tab::QuotaShare,
        Tab::SurplusShare,
        Tab::ExposureLossCost,
        Tab::CombinedRatio,
        Tab::Roe,
    ];

    /// Persisted identifier
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Decision => "uw",
            Tab::Xol => "xol",
            Tab::Rol => "rol",
            Tab::BurningCost => "bc",
            Tab::QuotaShare => "qs",
            Tab::SurplusShare => "ss",
            Tab::ExposureLossCost => "elc",
            Tab::CombinedRatio => "cr",
            Tab::Roe => "roe",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Decision => "Decision Tool",
            Tab::Xol => "XoL Layer",
            Tab::Rol => "ROL & Payback",
            Tab::BurningCost => "Burning Cost",
            Tab::QuotaShare => "Quota Share",
            Tab::SurplusShare => "Surplus Share",
            Tab::ExposureLossCost => "Exposure Loss Cost",
            Tab::CombinedRatio => "Combined Ratio",
            Tab::Roe => "ROE",
        }
    }
}

impl FromStr for Tab {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|t| t.id() == s)
            .ok_or_else(|| CompanionError::UnknownTab(s.to_string()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
