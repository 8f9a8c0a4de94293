//! Display layer: number formatting and per-tab text pages
//!
//! The calculators emit raw numbers; everything human-readable is built here.

mod format;
mod pages;

pub use format::{check_detail, fmt_money, fmt_pct, fmt_years, UNAVAILABLE};
pub use pages::{render_page, Page};
