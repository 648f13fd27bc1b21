//! Output structures for accumulation projections

use serde::{Deserialize, Serialize};

/// Account position at the end of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// 1-based month number
    pub month_index: u32,
    pub balance: f64,
    pub cumulative_contributed: f64,
    pub cumulative_growth: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Balance after the last month
    pub final_value: f64,

    /// Principal plus all monthly contributions
    pub total_contributed: f64,

    /// `final_value - total_contributed`
    pub total_growth: f64,

    /// One snapshot per month, in order
    pub monthly_series: Vec<MonthlySnapshot>,
}

impl ProjectionResult {
    /// Build the result from a completed series. `opening_balance` is reported
    /// when the series is empty, which validated inputs never produce.
    pub(crate) fn from_series(opening_balance: f64, monthly_series: Vec<MonthlySnapshot>) -> Self {
        let (final_value, total_contributed) = monthly_series
            .last()
            .map(|s| (s.balance, s.cumulative_contributed))
            .unwrap_or((opening_balance, opening_balance));

        Self {
            final_value,
            total_contributed,
            total_growth: final_value - total_contributed,
            monthly_series,
        }
    }

    /// Number of projected months
    pub fn months(&self) -> u32 {
        self.monthly_series.len() as u32
    }

    /// Summary statistics, as the streaming variant would report them
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            months: self.months(),
            final_value: self.final_value,
            total_contributed: self.total_contributed,
            total_growth: self.total_growth,
        }
    }
}

/// Totals of a projection without the per-month series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub final_value: f64,
    pub total_contributed: f64,
    pub total_growth: f64,
}

impl ProjectionSummary {
    pub(crate) fn from_last(opening_balance: f64, last: Option<MonthlySnapshot>) -> Self {
        match last {
            Some(s) => Self {
                months: s.month_index,
                final_value: s.balance,
                total_contributed: s.cumulative_contributed,
                total_growth: s.balance - s.cumulative_contributed,
            },
            None => Self {
                months: 0,
                final_value: opening_balance,
                total_contributed: opening_balance,
                total_growth: 0.0,
            },
        }
    }
}
