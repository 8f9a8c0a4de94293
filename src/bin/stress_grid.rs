//! Run every preset through every stress mode
//!
//! Outputs one row per preset and mode with the key ratios and the verdict

use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Instant;
use uw_companion::decision::MAX_SCORE;
use uw_companion::presets::load_presets;
use uw_companion::{PresetCatalog, StressGrid};

const OUTPUT_PATH: &str = "stress_grid_output.csv";

#[derive(Debug, Serialize)]
struct GridRow<'a> {
    preset: &'a str,
    stress: &'static str,
    structure: &'static str,
    xol_payout: f64,
    rol: f64,
    payback_years: f64,
    combined_ratio: f64,
    roe: f64,
    score: u8,
    max_score: u8,
    decision: &'static str,
    breaks: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let mut catalog = PresetCatalog::builtin();
    // Optional CSV of extra presets as the first argument
    if let Some(path) = std::env::args().nth(1) {
        let extra = load_presets(&path)
            .with_context(|| format!("Failed to load presets from {}", path))?;
        println!("Loaded {} presets from {}", extra.len(), path);
        catalog.extend(extra);
    }

    println!("Running {} presets through every stress mode...", catalog.len());
    let reports = StressGrid::new(catalog).run_presets();
    println!("Grid complete in {:?}", start.elapsed());

    let mut writer = csv::Writer::from_path(OUTPUT_PATH).context("Failed to create output file")?;
    for report in &reports {
        for outcome in &report.outcomes {
            let breaks: Vec<_> = report.degraded(outcome.mode).iter().map(|k| k.name()).collect();
            writer.serialize(GridRow {
                preset: &report.label,
                stress: outcome.mode.as_str(),
                structure: outcome.verdict.structure.as_str(),
                xol_payout: outcome.metrics.xol.payout,
                rol: outcome.metrics.rol.rol.to_f64(),
                payback_years: outcome.metrics.payback.years.to_f64(),
                combined_ratio: outcome.metrics.combined_ratio.combined.to_f64(),
                roe: outcome.metrics.roe.roe.to_f64(),
                score: outcome.verdict.score,
                max_score: MAX_SCORE,
                decision: outcome.verdict.outcome.as_str(),
                breaks: breaks.join(";"),
            })?;
        }
    }
    writer.flush()?;

    println!("Output written to {}", OUTPUT_PATH);
    Ok(())
}
