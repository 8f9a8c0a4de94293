//! Reinsurance structure under evaluation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompanionError;

/// Structure selected for the decision tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Structure {
    /// Occurrence excess-of-loss layer
    #[default]
    Xol,
    /// Proportional quota share
    QuotaShare,
}

impl Structure {
    /// Persisted identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::Xol => "xol",
            Structure::QuotaShare => "qs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Structure::Xol => "XoL Layer",
            Structure::QuotaShare => "Quota Share",
        }
    }

    /// Read a persisted selector: `"xol"` is XoL, any other string is quota share
    pub fn from_persisted(s: &str) -> Self {
        if s == "xol" {
            Structure::Xol
        } else {
            Structure::QuotaShare
        }
    }
}

impl FromStr for Structure {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xol" => Ok(Structure::Xol),
            "qs" => Ok(Structure::QuotaShare),
            other => Err(CompanionError::UnknownStructure(other.to_string())),
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
