//! Amortization schedule output structures

use serde::{Deserialize, Serialize};

/// One month of a loan repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month_index: u32,

    /// Balance still owed after this month's payment
    pub remaining_balance: f64,

    pub principal_portion: f64,
    pub interest_portion: f64,
}

impl AmortizationRow {
    /// Cash paid this month
    pub fn payment(&self) -> f64 {
        self.principal_portion + self.interest_portion
    }
}

/// Complete amortization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Level payment due every month
    pub monthly_payment: f64,

    /// Interest across the rows actually emitted
    pub total_interest_paid: f64,

    /// Principal across the rows actually emitted
    pub total_principal_paid: f64,

    /// Monthly rows; shorter than the term only if the balance hit zero early
    pub schedule: Vec<AmortizationRow>,
}

impl AmortizationResult {
    pub(crate) fn from_schedule(monthly_payment: f64, schedule: Vec<AmortizationRow>) -> Self {
        let total_interest_paid = schedule.iter().map(|r| r.interest_portion).sum();
        let total_principal_paid = schedule.iter().map(|r| r.principal_portion).sum();

        Self {
            monthly_payment,
            total_interest_paid,
            total_principal_paid,
            schedule,
        }
    }

    /// Months actually paid
    pub fn months_paid(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Balance after the last emitted row
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|r| r.remaining_balance).unwrap_or(0.0)
    }

    pub fn summary(&self) -> AmortizationSummary {
        AmortizationSummary {
            months_paid: self.months_paid(),
            monthly_payment: self.monthly_payment,
            total_interest_paid: self.total_interest_paid,
            total_principal_paid: self.total_principal_paid,
        }
    }
}

/// Totals of a loan schedule without the rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub months_paid: u32,
    pub monthly_payment: f64,
    pub total_interest_paid: f64,
    pub total_principal_paid: f64,
}

impl AmortizationSummary {
    pub(crate) fn empty(monthly_payment: f64) -> Self {
        Self {
            months_paid: 0,
            monthly_payment,
            total_interest_paid: 0.0,
            total_principal_paid: 0.0,
        }
    }

    /// Fold one emitted row into the running totals
    pub(crate) fn absorb(mut self, row: &AmortizationRow) -> Self {
        self.months_paid = row.month_index;
        self.total_interest_paid += row.interest_portion;
        self.total_principal_paid += row.principal_portion;
        self
    }
}
