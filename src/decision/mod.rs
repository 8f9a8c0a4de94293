//! Composite underwriting decision
//!
//! Grades live metrics against the hurdles for the selected structure:
//! - **XoL**: rate on line and payback checks
//! - **Quota share**: ceded share sanity check
//! - **Always**: combined ratio and return on equity checks
//!
//! The score is the number of passing checks, shown out of four, and maps to
//! `Pass` (4), `Review` (2-3) or `Decline` (0-1). Verdicts are recomputed on
//! every evaluation and never stored.

mod engine;
mod hurdles;

pub use engine::{
    decide, evaluate, CheckKind, DecisionCheck, Outcome, Verdict, MAX_SCORE, PASS_SCORE,
    QS_SHARE_CEILING, REVIEW_SCORE,
};
pub use hurdles::Hurdles;
