//! Level-payment loan amortization

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::schedule::{AmortizationResult, AmortizationRow, AmortizationSummary};
use crate::error::{require_months, require_non_negative, require_positive, Result};
use crate::rates::MonthlyRate;

/// Remaining balances within this fraction of the original principal are paid off
/// in full rather than carried into another row
const BALANCE_SNAP_RATIO: f64 = 1e-12;

/// Inputs for a loan schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationInput {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_percent: f64,

    /// Number of scheduled monthly payments
    pub term_months: u32,
}

impl AmortizationInput {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("principal", self.principal)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        require_months("term_months", self.term_months)
    }

    pub fn monthly_rate(&self) -> MonthlyRate {
        MonthlyRate::from_annual_percent(self.annual_rate_percent)
    }

    /// Level monthly payment (PMT)
    pub fn monthly_payment(&self) -> Result<f64> {
        self.validate()?;
        Ok(level_payment(self.principal, self.monthly_rate(), self.term_months))
    }

    /// Lazily yield the schedule rows after validating the inputs
    pub fn steps(&self) -> Result<AmortizationSteps> {
        self.validate()?;
        Ok(AmortizationSteps::new(self))
    }
}

/// P * r / (1 - (1+r)^-n), or P / n without interest
///
/// Same value as P * r * (1+r)^n / ((1+r)^n - 1) but tends to P * r instead of
/// NaN once (1+r)^n overflows.
fn level_payment(principal: f64, rate: MonthlyRate, term_months: u32) -> f64 {
    if rate.is_zero() {
        return principal / term_months as f64;
    }
    principal * rate.value() / (1.0 - rate.discount_factor(term_months))
}

/// Iterator over the rows of a loan schedule
///
/// Stops after `term_months` rows, or as soon as a row brings the balance to zero.
#[derive(Debug, Clone)]
pub struct AmortizationSteps {
    month_index: u32,
    remaining_balance: f64,
    monthly_payment: f64,
    monthly_rate: f64,
    term_months: u32,
    snap_threshold: f64,
}

impl AmortizationSteps {
    fn new(input: &AmortizationInput) -> Self {
        let rate = input.monthly_rate();
        Self {
            month_index: 0,
            remaining_balance: input.principal,
            monthly_payment: level_payment(input.principal, rate, input.term_months),
            monthly_rate: rate.value(),
            term_months: input.term_months,
            snap_threshold: input.principal * BALANCE_SNAP_RATIO,
        }
    }

    pub fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }
}

impl Iterator for AmortizationSteps {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<AmortizationRow> {
        if self.month_index >= self.term_months || self.remaining_balance <= 0.0 {
            return None;
        }
        self.month_index += 1;

        let interest_portion = self.remaining_balance * self.monthly_rate;
        let scheduled_principal = self.monthly_payment - interest_portion;

        // The last scheduled month, or any payment that covers what is left,
        // retires the balance exactly
        let pays_off = self.month_index == self.term_months
            || scheduled_principal >= self.remaining_balance - self.snap_threshold;

        let principal_portion = if pays_off {
            self.remaining_balance
        } else {
            scheduled_principal
        };
        self.remaining_balance = if pays_off {
            0.0
        } else {
            self.remaining_balance - principal_portion
        };

        Some(AmortizationRow {
            month_index: self.month_index,
            remaining_balance: self.remaining_balance,
            principal_portion,
            interest_portion,
        })
    }
}

/// Compute the level payment and the full repayment schedule
pub fn amortize(input: &AmortizationInput) -> Result<AmortizationResult> {
    let steps = input.steps()?;
    let monthly_payment = steps.monthly_payment();
    let schedule: Vec<AmortizationRow> = steps.collect();

    if (schedule.len() as u32) < input.term_months {
        warn!(
            "schedule paid off after {} of {} months",
            schedule.len(),
            input.term_months
        );
    }

    let result = AmortizationResult::from_schedule(monthly_payment, schedule);

    debug!(
        "amortized {:.2} at {}% over {} months: payment={:.2} interest={:.2}",
        input.principal,
        input.annual_rate_percent,
        input.term_months,
        result.monthly_payment,
        result.total_interest_paid
    );

    Ok(result)
}

/// Streaming variant of [`amortize`]: totals only, rows are dropped as they are folded
pub fn summarize(input: &AmortizationInput) -> Result<AmortizationSummary> {
    let steps = input.steps()?;
    let initial = AmortizationSummary::empty(steps.monthly_payment());
    Ok(steps.fold(initial, |summary, row| summary.absorb(&row)))
}
