//! Running state of an accumulation projection

use super::series::MonthlySnapshot;

/// State of the account at a point in time during projection
#[derive(Debug, Clone, Copy)]
pub struct AccumulationState {
    /// Months elapsed so far (0 before the first month)
    pub month_index: u32,

    /// End of period balance
    pub balance: f64,

    /// Principal plus every contribution made so far
    pub cumulative_contributed: f64,

    /// Interest credited so far
    pub cumulative_growth: f64,
}

impl AccumulationState {
    /// Initialize state at projection start; the principal counts as contributed
    pub fn opening(principal: f64) -> Self {
        Self {
            month_index: 0,
            balance: principal,
            cumulative_contributed: principal,
            cumulative_growth: 0.0,
        }
    }

    /// Credit one month of interest on the opening balance, then add the contribution
    pub fn advance_month(self, monthly_rate: f64, monthly_contribution: f64) -> Self {
        let growth = self.balance * monthly_rate;
        Self {
            month_index: self.month_index + 1,
            balance: self.balance + growth + monthly_contribution,
            cumulative_contributed: self.cumulative_contributed + monthly_contribution,
            cumulative_growth: self.cumulative_growth + growth,
        }
    }

    pub fn snapshot(&self) -> MonthlySnapshot {
        MonthlySnapshot {
            month_index: self.month_index,
            balance: self.balance,
            cumulative_contributed: self.cumulative_contributed,
            cumulative_growth: self.cumulative_growth,
        }
    }
}
