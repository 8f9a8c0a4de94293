//! Text pages for each calculator tab

use std::fmt;

use super::format::{check_detail, fmt_money, fmt_pct, fmt_years};
use crate::decision::{self, Hurdles, MAX_SCORE};
use crate::inputs::FieldKey;
use crate::metrics::MetricSet;
use crate::scenario::Structure;
use crate::session::{Session, Tab};

/// Rendered page: heading, formula, input echo, outputs and notes
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub formula: String,
    /// Input fields shown on the page with their current (stressed) values
    pub inputs: Vec<(String, String)>,
    pub rows: Vec<(String, String)>,
    pub notes: Vec<String>,
}

impl Page {
    fn new(title: &str, formula: &str) -> Self {
        Self {
            title: title.to_string(),
            formula: formula.to_string(),
            inputs: Vec::new(),
            rows: Vec::new(),
            notes: Vec::new(),
        }
    }

    fn input(mut self, session: &Session, field: FieldKey) -> Self {
        let value = session.scenario.get(field);
        self.inputs.push((format!("{} [{}]", field.label(), field.key()), format_plain(value)));
        self
    }

    fn row(mut self, label: &str, value: String) -> Self {
        self.rows.push((label.to_string(), value));
        self
    }

    fn note(mut self, note: &str) -> Self {
        self.notes.push(note.to_string());
        self
    }

    /// Value shown for a row label
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows.iter().find(|(l, _)| l == label).map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.formula)?;
        writeln!(f, "{}", "-".repeat(60))?;
        for (label, value) in &self.inputs {
            writeln!(f, "  {:<48} {:>18}", label, value)?;
        }
        if !self.inputs.is_empty() {
            writeln!(f, "{}", "-".repeat(60))?;
        }
        for (label, value) in &self.rows {
            writeln!(f, "  {:<40} {:>18}", label, value)?;
        }
        for note in &self.notes {
            writeln!(f, "  * {}", note)?;
        }
        Ok(())
    }
}

fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Render `tab` for the current session
pub fn render_page(tab: Tab, session: &Session) -> Page {
    let metrics = MetricSet::compute(&session.scenario);
    let ccy = session.currency.as_str();

    match tab {
        Tab::Decision => render_decision(session, &metrics),
        Tab::Xol => Page::new(
            "Excess of Loss (XoL) Layer",
            "Payout = min(max(Loss - Attachment, 0), Limit)",
        )
        .input(session, FieldKey::XolLoss)
        .input(session, FieldKey::XolAttach)
        .input(session, FieldKey::XolLimit)
        .row("Layer payout", fmt_money(metrics.xol.payout, ccy))
        .note("Stress to a cat year and watch the loss move deeper into the layer."),
        Tab::Rol => Page::new(
            "Rate on Line (ROL) & Payback",
            "ROL = Premium / Limit. Payback = Premium / Expected Annual Loss.",
        )
        .input(session, FieldKey::RolPremium)
        .input(session, FieldKey::RolLimit)
        .input(session, FieldKey::RolExpLoss)
        .row("ROL", fmt_pct(metrics.rol.rol))
        .row("Payback", fmt_years(metrics.payback.years))
        .note("Lower payback is generally better, but attachment and volatility matter."),
        Tab::BurningCost => Page::new(
            "Burning Cost",
            "Burning cost = Layer losses / Years. \
             Rate = Burning cost / Premium, loaded by (1 + Load).",
        )
        .input(session, FieldKey::BcLayerLosses)
        .input(session, FieldKey::BcYears)
        .input(session, FieldKey::BcPremium)
        .input(session, FieldKey::BcLoad)
        .row("Annualised burning cost", fmt_money(metrics.burning_cost.burning_cost, ccy))
        .row("Burning cost rate (BC / Premium)", fmt_pct(metrics.burning_cost.bc_rate))
        .row("Loaded BC rate", fmt_pct(metrics.burning_cost.loaded_rate))
        .note("Cat layers usually need extra load for tail risk beyond what history shows."),
        Tab::QuotaShare => Page::new(
            "Quota Share (QS)",
            "Reinsurer takes a fixed share of premium and the same share of losses.",
        )
        .input(session, FieldKey::QsGwp)
        .input(session, FieldKey::QsShare)
        .input(session, FieldKey::QsLosses)
        .row("Ceded premium", fmt_money(metrics.quota_share.ceded_premium, ccy))
        .row("Ceded losses", fmt_money(metrics.quota_share.ceded_loss, ccy))
        .row("Net premium (after QS)", fmt_money(metrics.quota_share.net_premium, ccy))
        .row("Net losses (after QS)", fmt_money(metrics.quota_share.net_loss, ccy)),
        Tab::SurplusShare => Page::new(
            "Surplus Share",
            "Keep a retention per policy; the reinsurer takes the surplus up to a number of lines.",
        )
        .input(session, FieldKey::SsSumInsured)
        .input(session, FieldKey::SsRetention)
        .input(session, FieldKey::SsLines)
        .input(session, FieldKey::SsLoss)
        .row("Max ceded capacity", fmt_money(metrics.surplus_share.max_ceded, ccy))
        .row("Ceded share (approx)", fmt_pct(metrics.surplus_share.ceded_share))
        .row("Ceded loss", fmt_money(metrics.surplus_share.ceded_loss, ccy))
        .row("Net loss", fmt_money(metrics.surplus_share.net_loss, ccy)),
        Tab::ExposureLossCost => Page::new(
            "Exposure Loss Cost",
            "Expected layer loss = Subject Premium x ELR x Layer Factor.",
        )
        .input(session, FieldKey::ElcSubPrem)
        .input(session, FieldKey::ElcElr)
        .input(session, FieldKey::ElcLayerFactor)
        .row("Expected gross losses", fmt_money(metrics.exposure.expected_gross_loss, ccy))
        .row("Expected layer losses", fmt_money(metrics.exposure.expected_layer_loss, ccy)),
        Tab::CombinedRatio => Page::new(
            "Combined Ratio",
            "Combined = Loss Ratio + Expense Ratio. Below 100% is an underwriting profit.",
        )
        .input(session, FieldKey::CrLosses)
        .input(session, FieldKey::CrEarnedPrem)
        .input(session, FieldKey::CrExpenses)
        .row("Loss ratio", fmt_pct(metrics.combined_ratio.loss_ratio))
        .row("Expense ratio", fmt_pct(metrics.combined_ratio.expense_ratio))
        .row("Combined ratio", fmt_pct(metrics.combined_ratio.combined)),
        Tab::Roe => Page::new("Return on Equity (ROE)", "ROE = Net Income / Equity.")
            .input(session, FieldKey::RoeNetIncome)
            .input(session, FieldKey::RoeEquity)
            .row("ROE", fmt_pct(metrics.roe.roe))
            .note("ROE can look great with thin equity; stress it before trusting it."),
    }
}

fn render_decision(session: &Session, metrics: &MetricSet) -> Page {
    let scenario = &session.scenario;
    let structure = scenario.structure();
    let verdict = decision::evaluate(structure, &Hurdles::from_scenario(scenario), metrics);
    let ccy = session.currency.as_str();

    let mut page = Page::new(
        "Mini Underwriting Decision Tool",
        &format!("Structure: {} | Stress: {}", structure.label(), scenario.stress().label()),
    );
    if structure == Structure::Xol {
        page = page.input(session, FieldKey::UwTargetRol).input(session, FieldKey::UwMaxPayback);
    }
    page = page
        .input(session, FieldKey::UwMaxCr)
        .input(session, FieldKey::UwMinRoe)
        .row("Decision", verdict.outcome.to_string())
        .row("Score", format!("{} / {}", verdict.score, MAX_SCORE));

    for check in &verdict.checks {
        let marker = if check.passed { "ok" } else { "FAIL" };
        page = page.row(&format!("[{}] {}", marker, check.name()), check_detail(check));
    }

    page = page
        .row("Combined Ratio", fmt_pct(metrics.combined_ratio.combined))
        .row("ROE", fmt_pct(metrics.roe.roe));
    page = match structure {
        Structure::Xol => page
            .row("ROL", fmt_pct(metrics.rol.rol))
            .row("Payback", fmt_years(metrics.payback.years))
            .row("Example Layer Payout (current loss)", fmt_money(metrics.xol.payout, ccy)),
        Structure::QuotaShare => page
            .row("Ceded Premium (QS)", fmt_money(metrics.quota_share.ceded_premium, ccy))
            .row("Ceded Loss (QS)", fmt_money(metrics.quota_share.ceded_loss, ccy)),
    };

    page.note("Switch the stress mode to a cat year and watch which hurdle breaks first.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioUpdate;
    use crate::stress::StressMode;

    #[test]
    fn test_decision_page_for_property_cat() {
        let page = render_page(Tab::Decision, &Session::initial());
        assert_eq!(page.value("Decision"), Some("REVIEW"));
        assert_eq!(page.value("Score"), Some("3 / 4"));
        assert_eq!(page.value("[ok] ROL vs target"), Some("17.50% vs target 18.00%"));
        assert_eq!(page.value("[ok] Payback vs max"), Some("1.94 yrs vs max 2.50 yrs"));
        assert_eq!(page.value("[ok] Combined Ratio"), Some("91.67% vs max 100.00%"));
        assert_eq!(page.value("[FAIL] ROE"), Some("8.00% vs min 10.00%"));
        assert_eq!(page.value("Example Layer Payout (current loss)"), Some("USD 15,000,000"));
    }

    #[test]
    fn test_quota_share_decision_page() {
        let session = Session::initial().apply(ScenarioUpdate::SetStructure(Structure::QuotaShare));
        let page = render_page(Tab::Decision, &session);
        assert_eq!(page.value("[ok] Ceded share sanity"), Some("QS share 25.00% (learning check)"));
        assert_eq!(page.value("Ceded Premium (QS)"), Some("USD 4,500,000"));
        assert!(page.value("ROL").is_none());
        assert!(!page.inputs.iter().any(|(label, _)| label.contains("uw.targetROL")));
    }

    #[test]
    fn test_undefined_renders_marker() {
        let session =
            Session::initial().apply(ScenarioUpdate::SetField(FieldKey::CrEarnedPrem, 0.0.into()));
        let page = render_page(Tab::CombinedRatio, &session);
        assert_eq!(page.value("Loss ratio"), Some("—"));
        assert_eq!(page.value("Combined ratio"), Some("—"));
    }

    #[test]
    fn test_pages_show_stressed_inputs() {
        let session = Session::initial().apply(ScenarioUpdate::SetStress(StressMode::CatYear));
        let page = render_page(Tab::Xol, &session);
        assert_eq!(page.value("Layer payout"), Some("USD 20,000,000"));
        assert!(page.inputs[0].1.starts_with("33750000"));
    }

    #[test]
    fn test_every_tab_renders() {
        let session = Session::initial();
        for tab in Tab::ALL {
            let page = render_page(tab, &session);
            assert!(!page.rows.is_empty(), "{} rendered no rows", tab);
            assert!(!page.to_string().is_empty());
        }
    }
}
