//! Property tests for calculator and decision invariants.
//!
//! Uses proptest to verify:
//! 1. XoL payout bounds
//! 2. Normal stress is the identity, stressed loss fields are ordered
//! 3. Stressed ELR stays inside [0, 0.999]
//! 4. A zero earned premium leaves every combined ratio output undefined
//! 5. The verdict depends only on its inputs and counts passing checks

use proptest::prelude::*;
use uw_companion::decision::{evaluate, Hurdles, Outcome};
use uw_companion::inputs::{FieldClass, FieldKey};
use uw_companion::metrics::{CombinedRatio, Metric, MetricSet, XolLayer};
use uw_companion::stress::{self, StressMode};
use uw_companion::{Scenario, ScenarioUpdate, Structure};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_amount() -> impl Strategy<Value = f64> {
    -50_000_000.0..100_000_000.0_f64
}

fn arb_field() -> impl Strategy<Value = FieldKey> {
    prop::sample::select(FieldKey::ALL.to_vec())
}

fn loss_like_fields() -> Vec<FieldKey> {
    FieldKey::ALL
        .into_iter()
        .filter(|f| f.class() == FieldClass::LossLike)
        .collect()
}

fn arb_structure() -> impl Strategy<Value = Structure> {
    prop_oneof![Just(Structure::Xol), Just(Structure::QuotaShare)]
}

fn arb_mode() -> impl Strategy<Value = StressMode> {
    prop::sample::select(StressMode::ALL.to_vec())
}

fn arb_hurdles() -> impl Strategy<Value = Hurdles> {
    (0.0..0.5_f64, 0.0..5.0_f64, 0.5..1.5_f64, -0.1..0.3_f64).prop_map(
        |(target_rol, max_payback, max_cr, min_roe)| Hurdles {
            target_rol,
            max_payback,
            max_cr,
            min_roe,
        },
    )
}

/// Scenario with random values in the fields the decision reads
fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (
        arb_structure(),
        arb_mode(),
        prop::collection::vec(arb_amount(), 8),
        -0.5..1.0_f64,
    )
        .prop_map(|(structure, mode, amounts, share)| {
            let fields = [
                FieldKey::RolPremium,
                FieldKey::RolLimit,
                FieldKey::RolExpLoss,
                FieldKey::CrLosses,
                FieldKey::CrEarnedPrem,
                FieldKey::CrExpenses,
                FieldKey::RoeNetIncome,
                FieldKey::RoeEquity,
            ];
            let updates = fields
                .into_iter()
                .zip(amounts)
                .map(|(field, value)| ScenarioUpdate::SetField(field, value.into()))
                .chain([
                    ScenarioUpdate::SetField(FieldKey::QsShare, share.into()),
                    ScenarioUpdate::SetStructure(structure),
                    ScenarioUpdate::SetStress(mode),
                ]);
            Scenario::new().apply_all(updates)
        })
}

// ── 1. XoL payout bounds ─────────────────────────────────────────────

proptest! {
    #[test]
    fn xol_payout_within_limit(loss in arb_amount(), attach in arb_amount(), limit in arb_amount()) {
        let layer = XolLayer::calculate(loss, attach, limit);
        prop_assert!(layer.payout >= 0.0);
        prop_assert!(layer.payout <= limit.max(0.0));
        if loss <= attach {
            prop_assert_eq!(layer.payout, 0.0);
        }
    }
}

// ── 2. Stress transform ──────────────────────────────────────────────

proptest! {
    #[test]
    fn normal_stress_is_identity(field in arb_field(), value in arb_amount()) {
        prop_assert_eq!(stress::apply(field, value, StressMode::Normal), value);
    }

    #[test]
    fn stress_is_pure(field in arb_field(), value in arb_amount(), mode in arb_mode()) {
        prop_assert_eq!(stress::apply(field, value, mode), stress::apply(field, value, mode));
    }

    #[test]
    fn loss_fields_ordered_by_severity(
        field in prop::sample::select(loss_like_fields()),
        value in 0.0..100_000_000.0_f64,
    ) {
        let cat = stress::apply(field, value, StressMode::CatYear);
        let bad_dev = stress::apply(field, value, StressMode::BadDevelopment);
        prop_assert!(cat >= bad_dev);
        prop_assert!(bad_dev >= value);
    }
}

// ── 3. ELR clamp ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn stressed_elr_within_bounds(
        value in 0.0..10.0_f64,
        mode in prop_oneof![Just(StressMode::CatYear), Just(StressMode::BadDevelopment)],
    ) {
        let stressed = stress::apply(FieldKey::ElcElr, value, mode);
        prop_assert!((0.0..=stress::MAX_STRESSED_ELR).contains(&stressed));
    }
}

// ── 4. Combined ratio with no earned premium ─────────────────────────

proptest! {
    #[test]
    fn zero_earned_premium_is_undefined(losses in arb_amount(), expenses in arb_amount()) {
        let cr = CombinedRatio::calculate(losses, 0.0, expenses);
        prop_assert!(matches!(cr.loss_ratio, Metric::Undefined(_)));
        prop_assert!(matches!(cr.expense_ratio, Metric::Undefined(_)));
        prop_assert!(matches!(cr.combined, Metric::Undefined(_)));
        prop_assert!(!cr.combined.at_most(f64::MAX));
    }
}

// ── 5. Decision determinism ──────────────────────────────────────────

proptest! {
    #[test]
    fn verdict_is_deterministic(scenario in arb_scenario(), hurdles in arb_hurdles()) {
        let metrics = MetricSet::compute(&scenario);
        let first = evaluate(scenario.structure(), &hurdles, &metrics);
        let second = evaluate(scenario.structure(), &hurdles, &MetricSet::compute(&scenario));
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn score_counts_passing_checks(scenario in arb_scenario(), hurdles in arb_hurdles()) {
        let metrics = MetricSet::compute(&scenario);
        let verdict = evaluate(scenario.structure(), &hurdles, &metrics);
        let passed = verdict.checks.iter().filter(|c| c.passed).count();
        prop_assert_eq!(verdict.score as usize, passed);
        prop_assert_eq!(verdict.outcome, Outcome::from_score(verdict.score));

        let expected_checks = match scenario.structure() {
            Structure::Xol => 4,
            Structure::QuotaShare => 3,
        };
        prop_assert_eq!(verdict.checks.len(), expected_checks);
    }
}
