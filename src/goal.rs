//! Required monthly contribution to reach a savings goal
//!
//! Inverts the accumulation projector in closed form: contributions are made at
//! the end of each month, after that month's interest is credited.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_months, require_non_negative, Result};
use crate::rates::MonthlyRate;

/// Inputs for the goal solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSolverInput {
    /// Value the account should hold at the deadline
    pub target_amount: f64,

    /// Amount already saved
    pub initial_amount: f64,

    /// Expected annual return in percent
    pub annual_rate_percent: f64,

    /// Months until the deadline
    pub horizon_months: u32,
}

impl GoalSolverInput {
    pub fn new(
        target_amount: f64,
        initial_amount: f64,
        annual_rate_percent: f64,
        horizon_months: u32,
    ) -> Self {
        Self {
            target_amount,
            initial_amount,
            annual_rate_percent,
            horizon_months,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_finite("target_amount", self.target_amount)?;
        require_non_negative("initial_amount", self.initial_amount)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        require_months("horizon_months", self.horizon_months)
    }

    /// Value of the initial amount at the deadline with no further contributions
    pub fn initial_amount_at_deadline(&self) -> f64 {
        self.initial_amount
            * MonthlyRate::from_annual_percent(self.annual_rate_percent)
                .compound_factor(self.horizon_months)
    }
}

/// Calculate the monthly contribution needed to reach the target by the deadline.
///
/// # Arguments
/// * `input` - target, initial amount, expected return and horizon
///
/// # Returns
/// * `Result<f64>` - required contribution, never negative. A goal that the
///   initial amount reaches on its own reports 0.
pub fn solve_required_contribution(input: &GoalSolverInput) -> Result<f64> {
    input.validate()?;

    let rate = MonthlyRate::from_annual_percent(input.annual_rate_percent);
    let months = input.horizon_months;

    let raw = if rate.is_zero() {
        (input.target_amount - input.initial_amount) / months as f64
    } else {
        // (target - initial * g) * r / (g - 1), with g = (1+r)^n, rewritten over
        // d = 1/g so it stays finite when g overflows
        let discount = rate.discount_factor(months);
        let r = rate.value();
        (input.target_amount * r * discount - input.initial_amount * r) / (1.0 - discount)
    };

    if raw < 0.0 {
        warn!(
            "goal of {:.2} already met by initial amount growing to {:.2}; no contribution needed",
            input.target_amount,
            input.initial_amount_at_deadline()
        );
        return Ok(0.0);
    }

    debug!(
        "goal {:.2} in {} months at {}%: contribute {:.2}/month",
        input.target_amount, months, input.annual_rate_percent, raw
    );
    Ok(raw)
}
