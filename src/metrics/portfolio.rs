//! Portfolio-wide profitability: combined ratio and return on equity

use serde::{Deserialize, Serialize};

use super::value::{Metric, Undefined};
use crate::inputs::FieldKey;
use crate::scenario::Scenario;

/// Underwriting profitability; below 1.0 is an underwriting profit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedRatio {
    pub losses: f64,
    pub earned_premium: f64,
    pub expenses: f64,
    pub loss_ratio: Metric,
    pub expense_ratio: Metric,
    pub combined: Metric,
}

impl CombinedRatio {
    pub fn calculate(losses: f64, earned_premium: f64, expenses: f64) -> Self {
        let loss_ratio = Metric::ratio(losses, earned_premium, Undefined::NonPositiveEarnedPremium);
        let expense_ratio =
            Metric::ratio(expenses, earned_premium, Undefined::NonPositiveEarnedPremium);
        Self {
            losses,
            earned_premium,
            expenses,
            loss_ratio,
            expense_ratio,
            combined: loss_ratio.zip_with(expense_ratio, |l, e| l + e),
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(
            scenario.get(FieldKey::CrLosses),
            scenario.get(FieldKey::CrEarnedPrem),
            scenario.get(FieldKey::CrExpenses),
        )
    }
}

/// Capital efficiency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnOnEquity {
    pub net_income: f64,
    pub equity: f64,
    pub roe: Metric,
}

impl ReturnOnEquity {
    pub fn calculate(net_income: f64, equity: f64) -> Self {
        Self {
            net_income,
            equity,
            roe: Metric::ratio(net_income, equity, Undefined::NonPositiveEquity),
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::calculate(scenario.get(FieldKey::RoeNetIncome), scenario.get(FieldKey::RoeEquity))
    }
}
