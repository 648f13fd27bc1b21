//! Uniform result envelope shared by every scenario

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amortization::AmortizationRow;
use crate::projection::MonthlySnapshot;

/// Named scenarios exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Retirement,
    Goal,
    Investment,
    Loan,
}

impl ScenarioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Retirement => "retirement",
            ScenarioKind::Goal => "goal",
            ScenarioKind::Investment => "investment",
            ScenarioKind::Loan => "loan",
        }
    }

    /// Case-insensitive lookup by name; `None` for anything unrecognized
    pub fn from_name(name: &str) -> Option<Self> {
        [
            ScenarioKind::Retirement,
            ScenarioKind::Goal,
            ScenarioKind::Investment,
            ScenarioKind::Loan,
        ]
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Month-by-month trajectory of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum MonthlySeries {
    /// Growing balance of a savings or investment account
    Accumulation(Vec<MonthlySnapshot>),
    /// Declining balance of a loan
    Amortization(Vec<AmortizationRow>),
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        match self {
            MonthlySeries::Accumulation(rows) => rows.len(),
            MonthlySeries::Amortization(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the first `months` entries
    pub fn truncate(&mut self, months: usize) {
        match self {
            MonthlySeries::Accumulation(rows) => rows.truncate(months),
            MonthlySeries::Amortization(rows) => rows.truncate(months),
        }
    }

    /// (month, balance) pairs regardless of series kind
    pub fn balances(&self) -> Vec<(u32, f64)> {
        match self {
            MonthlySeries::Accumulation(rows) => {
                rows.iter().map(|s| (s.month_index, s.balance)).collect()
            }
            MonthlySeries::Amortization(rows) => {
                rows.iter().map(|r| (r.month_index, r.remaining_balance)).collect()
            }
        }
    }
}

/// Result of one scenario solve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: ScenarioKind,

    /// Balance at the end of the horizon (0 for a repaid loan)
    pub final_amount: f64,

    /// Money put in by the user (payments, for a loan)
    pub total_contributions: f64,

    /// Growth attributable to interest; reported as computed, never clamped
    pub total_returns: f64,

    pub monthly_series: MonthlySeries,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_interest_paid: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_monthly_contribution: Option<f64>,
}

impl ScenarioResult {
    pub(crate) fn accumulation(
        scenario_name: ScenarioKind,
        final_amount: f64,
        total_contributions: f64,
        total_returns: f64,
        series: Vec<MonthlySnapshot>,
    ) -> Self {
        Self {
            scenario_name,
            final_amount,
            total_contributions,
            total_returns,
            monthly_series: MonthlySeries::Accumulation(series),
            monthly_payment: None,
            total_interest_paid: None,
            required_monthly_contribution: None,
        }
    }

    /// Number of months in the series
    pub fn months(&self) -> usize {
        self.monthly_series.len()
    }
}
