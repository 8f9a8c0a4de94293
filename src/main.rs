//! UW Companion CLI
//!
//! Edit the saved scenario, switch stress modes and presets, and print the
//! calculator pages or the underwriting decision.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use uw_companion::decision::{self, MAX_SCORE};
use uw_companion::inputs::STRUCTURE_KEY;
use uw_companion::report::{check_detail, render_page};
use uw_companion::session::DEFAULT_STATE_PATH;
use uw_companion::{
    FieldKey, LocalStore, Metric, Outcome, PresetCatalog, RawValue, ScenarioUpdate, Session,
    StressGrid, StressMode, StressReport, Structure,
};

#[derive(Debug, Parser)]
#[command(
    name = "uw_companion",
    version,
    about = "Reinsurance underwriting calculator and decision tool"
)]
struct Cli {
    /// Key-value file holding the saved session
    #[arg(long, global = true, env = "UW_COMPANION_STATE", default_value = DEFAULT_STATE_PATH)]
    state: PathBuf,

    /// Extra presets to load from CSV (preset_id,preset_name,tags,field,value)
    #[arg(long, global = true, env = "UW_COMPANION_PRESETS")]
    presets: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a calculator page (defaults to the active tab)
    Show {
        /// uw, xol, rol, bc, qs, ss, elc, cr or roe
        #[arg(long)]
        tab: Option<String>,
    },
    /// Print the underwriting decision
    Decide {
        #[arg(long)]
        json: bool,
    },
    /// Set an input field, e.g. `set xol.loss 30,000,000`
    Set { key: String, value: String },
    /// Remove an input field so it reads as its default
    Unset { key: String },
    /// Select the structure graded by the decision tool (xol or qs)
    Structure { structure: String },
    /// Select the stress mode (normal, cat or baddev)
    Stress { mode: String },
    /// Set the currency label used for display
    Currency { code: String },
    /// Apply a preset over the current inputs
    Preset { id: String },
    /// List available presets
    Presets,
    /// Evaluate every stress mode and report which hurdles break
    Grid {
        /// Run every preset instead of the saved scenario
        #[arg(long)]
        all_presets: bool,
        #[arg(long)]
        json: bool,
    },
    /// Discard the saved session and start from the default preset
    Reset,
}

#[derive(Debug, Serialize)]
struct CheckView {
    name: &'static str,
    passed: bool,
    detail: String,
    observed: Metric,
    threshold: f64,
}

#[derive(Debug, Serialize)]
struct DecisionView {
    structure: Structure,
    stress: StressMode,
    outcome: Outcome,
    score: u8,
    max_score: u8,
    checks: Vec<CheckView>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut catalog = PresetCatalog::builtin();
    if let Some(path) = &cli.presets {
        let extra = uw_companion::presets::load_presets(path)
            .with_context(|| format!("Failed to load presets from {}", path.display()))?;
        catalog.extend(extra);
    }

    let mut store = LocalStore::open(&cli.state);
    let session = Session::load(&store).with_known_preset(&catalog);

    match cli.command {
        Command::Show { tab } => {
            let session = match tab {
                Some(tab) => {
                    let mut session = Session { active_tab: tab.parse()?, ..session };
                    session.save(&mut store)?;
                    session
                }
                None => session,
            };
            print!("{}", render_page(session.active_tab, &session));
        }
        Command::Decide { json } => print_decision(&session, json)?,
        Command::Set { key, value } => {
            let update = if key == STRUCTURE_KEY {
                ScenarioUpdate::SetStructure(value.parse()?)
            } else {
                ScenarioUpdate::SetField(FieldKey::parse(&key)?, RawValue::Text(value))
            };
            save_and_show(session.apply(update), &mut store)?;
        }
        Command::Unset { key } => {
            let update = ScenarioUpdate::ClearField(FieldKey::parse(&key)?);
            save_and_show(session.apply(update), &mut store)?;
        }
        Command::Structure { structure } => {
            let update = ScenarioUpdate::SetStructure(structure.parse()?);
            save_and_show(session.apply(update), &mut store)?;
        }
        Command::Stress { mode } => {
            let update = ScenarioUpdate::SetStress(mode.parse()?);
            save_and_show(session.apply(update), &mut store)?;
        }
        Command::Currency { code } => {
            let session = Session { currency: code.trim().to_uppercase(), ..session };
            save_and_show(session, &mut store)?;
        }
        Command::Preset { id } => {
            let preset = catalog.get(&id)?;
            println!("{}  [{}]", preset.name, preset.tags.join(" | "));
            save_and_show(session.select_preset(preset), &mut store)?;
        }
        Command::Presets => {
            for preset in catalog.iter() {
                let marker = if preset.id == session.preset { "*" } else { " " };
                let tags = preset.tags.join(" | ");
                println!("{} {:<20} {}  [{}]", marker, preset.id, preset.name, tags);
            }
        }
        Command::Grid { all_presets, json } => {
            let grid = StressGrid::new(catalog);
            let reports = if all_presets {
                grid.run_presets()
            } else {
                vec![grid.run(&session.preset, &session.scenario)]
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                reports.iter().for_each(print_grid);
            }
        }
        Command::Reset => {
            let mut session = Session::initial();
            session.save(&mut store)?;
            log::info!("Session reset in {}", store.path().display());
            print!("{}", render_page(session.active_tab, &session));
        }
    }

    Ok(())
}

fn save_and_show(mut session: Session, store: &mut LocalStore) -> Result<()> {
    session
        .save(store)
        .with_context(|| format!("Failed to save session to {}", store.path().display()))?;
    print!("{}", render_page(session.active_tab, &session));
    Ok(())
}

fn print_decision(session: &Session, json: bool) -> Result<()> {
    let verdict = decision::decide(&session.scenario);

    if json {
        let view = DecisionView {
            structure: verdict.structure,
            stress: session.scenario.stress(),
            outcome: verdict.outcome,
            score: verdict.score,
            max_score: MAX_SCORE,
            checks: verdict
                .checks
                .iter()
                .map(|check| CheckView {
                    name: check.name(),
                    passed: check.passed,
                    detail: check_detail(check),
                    observed: check.observed,
                    threshold: check.threshold,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Decision: {}   Score: {} / {}", verdict.outcome, verdict.score, MAX_SCORE);
    for check in &verdict.checks {
        let marker = if check.passed { "ok  " } else { "FAIL" };
        println!("  [{}] {}: {}", marker, check.name(), check_detail(check));
    }
    Ok(())
}

fn print_grid(report: &StressReport) {
    println!("{}", report.label);
    println!("{}", "-".repeat(60));
    for outcome in &report.outcomes {
        let degraded: Vec<_> = report.degraded(outcome.mode).iter().map(|k| k.name()).collect();
        println!(
            "  {:<16} {:<8} {} / {}  {}",
            outcome.mode.label(),
            outcome.verdict.outcome.as_str(),
            outcome.verdict.score,
            MAX_SCORE,
            if degraded.is_empty() {
                String::new()
            } else {
                format!("breaks: {}", degraded.join(", "))
            },
        );
    }
    println!();
}
