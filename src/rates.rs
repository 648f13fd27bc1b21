//! Monthly rate conversion and closed-form compounding factors
//!
//! Every solver quotes rates as an annual percentage (8.5 means 8.5% a year)
//! and compounds monthly at `annual / 100 / 12`.

use serde::{Deserialize, Serialize};

/// Below this the compounding formulas lose all precision in `(1+r)^n - 1`,
/// so callers switch to the linear branch
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Periodic (monthly) interest rate as a decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRate(f64);

impl MonthlyRate {
    /// Convert an annual percentage rate to a monthly decimal rate
    pub fn from_annual_percent(annual_rate_percent: f64) -> Self {
        Self(annual_rate_percent / 100.0 / 12.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Zero-rate paths use linear formulas instead of the compounding ones
    pub fn is_zero(self) -> bool {
        self.0.abs() < ZERO_RATE_EPSILON
    }

    /// Growth multiplier over `months` periods: (1+r)^n
    ///
    /// Overflows to infinity for very long horizons at high rates.
    pub fn compound_factor(self, months: u32) -> f64 {
        (1.0 + self.0).powf(f64::from(months))
    }

    /// Present value of 1 due in `months` periods: (1+r)^-n
    ///
    /// Underflows to 0 where [`compound_factor`](Self::compound_factor) overflows,
    /// so formulas written in terms of it stay finite.
    pub fn discount_factor(self, months: u32) -> f64 {
        (1.0 + self.0).powf(-f64::from(months))
    }

    /// Future value of 1 paid at the end of each of `months` periods:
    /// ((1+r)^n - 1) / r, or n when the rate is zero
    pub fn annuity_factor(self, months: u32) -> f64 {
        if self.is_zero() {
            return months as f64;
        }
        (self.compound_factor(months) - 1.0) / self.0
    }

    /// Closed-form future value of a principal plus end-of-month contributions
    pub fn future_value(self, principal: f64, monthly_contribution: f64, months: u32) -> f64 {
        principal * self.compound_factor(months) + monthly_contribution * self.annuity_factor(months)
    }
}
