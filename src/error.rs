//! Error types for the boundaries around the calculation core
//!
//! The calculators and the decision engine are total and never fail. Errors only
//! arise when parsing user-supplied keys, loading preset files, or reading and
//! writing the persisted session.

use thiserror::Error;

/// Errors raised at the CLI, preset and persistence boundaries
#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("Unknown input field: {0}")]
    UnknownField(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown stress mode: {0}. Must be one of: normal, cat, baddev")]
    UnknownStressMode(String),

    #[error("Unknown structure: {0}. Must be one of: xol, qs")]
    UnknownStructure(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Invalid preset row {row}: {message}")]
    InvalidPresetRow { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias for boundary operations
pub type Result<T> = std::result::Result<T, CompanionError>;
