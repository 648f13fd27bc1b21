//! Accumulation projector: compound growth of a principal plus a fixed monthly contribution

use log::debug;
use serde::{Deserialize, Serialize};

use super::series::{MonthlySnapshot, ProjectionResult, ProjectionSummary};
use super::state::AccumulationState;
use crate::error::{require_months, require_non_negative, Result};
use crate::rates::MonthlyRate;

/// Inputs for an accumulation projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Opening balance
    pub principal: f64,

    /// Amount added at the end of every month
    pub monthly_contribution: f64,

    /// Annual interest rate in percent (8.0 = 8%)
    pub annual_rate_percent: f64,

    /// Number of months to project
    pub horizon_months: u32,
}

impl ProjectionInput {
    pub fn new(
        principal: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        horizon_months: u32,
    ) -> Self {
        Self {
            principal,
            monthly_contribution,
            annual_rate_percent,
            horizon_months,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_non_negative("principal", self.principal)?;
        require_non_negative("monthly_contribution", self.monthly_contribution)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        require_months("horizon_months", self.horizon_months)
    }

    pub fn monthly_rate(&self) -> MonthlyRate {
        MonthlyRate::from_annual_percent(self.annual_rate_percent)
    }

    /// Lazily yield one snapshot per month after validating the inputs
    pub fn steps(&self) -> Result<AccumulationSteps> {
        self.validate()?;
        Ok(AccumulationSteps::new(self))
    }
}

/// Iterator over the months of a projection
///
/// Each item is produced from the previous state alone, so the full series and
/// the streaming summary come from the same fold.
#[derive(Debug, Clone)]
pub struct AccumulationSteps {
    state: AccumulationState,
    monthly_rate: f64,
    monthly_contribution: f64,
    horizon_months: u32,
}

impl AccumulationSteps {
    fn new(input: &ProjectionInput) -> Self {
        Self {
            state: AccumulationState::opening(input.principal),
            monthly_rate: input.monthly_rate().value(),
            monthly_contribution: input.monthly_contribution,
            horizon_months: input.horizon_months,
        }
    }
}

impl Iterator for AccumulationSteps {
    type Item = MonthlySnapshot;

    fn next(&mut self) -> Option<MonthlySnapshot> {
        if self.state.month_index >= self.horizon_months {
            return None;
        }
        self.state = self.state.advance_month(self.monthly_rate, self.monthly_contribution);
        Some(self.state.snapshot())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.horizon_months - self.state.month_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AccumulationSteps {}

/// Project account growth month by month and materialize the full series
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult> {
    let monthly_series: Vec<MonthlySnapshot> = input.steps()?.collect();
    let result = ProjectionResult::from_series(input.principal, monthly_series);

    debug!(
        "projected {} months: principal={:.2} contribution={:.2} rate={}% -> final={:.2}",
        input.horizon_months,
        input.principal,
        input.monthly_contribution,
        input.annual_rate_percent,
        result.final_value
    );

    Ok(result)
}

/// Streaming variant of [`project`]: folds every month into running totals and
/// keeps only the last snapshot
pub fn summarize(input: &ProjectionInput) -> Result<ProjectionSummary> {
    let last = input.steps()?.last();
    Ok(ProjectionSummary::from_last(input.principal, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_projection_runs() {
        let input = ProjectionInput::new(10_000.0, 500.0, 6.0, 12);
        let result = project(&input).unwrap();

        assert_eq!(result.monthly_series.len(), 12);
        assert_eq!(result.monthly_series[0].month_index, 1);
        assert_eq!(result.monthly_series[11].month_index, 12);
        assert_eq!(result.total_contributed, 16_000.0);
        assert!(result.final_value > result.total_contributed);
    }

    #[test]
    fn test_first_month_growth_precedes_contribution() {
        let input = ProjectionInput::new(1_200.0, 100.0, 12.0, 1);
        let result = project(&input).unwrap();

        // 1% of the opening balance, contribution not yet earning
        assert_relative_eq!(result.monthly_series[0].cumulative_growth, 12.0, epsilon = 1e-9);
        assert_relative_eq!(result.final_value, 1_312.0, epsilon = 1e-9);
    }

    #[test]
    fn test_matches_closed_form() {
        let input = ProjectionInput::new(50_000_000.0, 5_000_000.0, 8.0, 360);
        let result = project(&input).unwrap();
        let expected = input.monthly_rate().future_value(50_000_000.0, 5_000_000.0, 360);

        assert_relative_eq!(result.final_value, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_total_growth_matches_running_growth() {
        let input = ProjectionInput::new(20_000.0, 750.0, 7.25, 240);
        let result = project(&input).unwrap();
        let last = result.monthly_series.last().unwrap();

        assert_relative_eq!(result.total_growth, last.cumulative_growth, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let input = ProjectionInput::new(1_000.0, 250.0, 0.0, 48);
        let result = project(&input).unwrap();

        assert_eq!(result.final_value, 1_000.0 + 250.0 * 48.0);
        assert_eq!(result.total_growth, 0.0);
        assert!(result.monthly_series.iter().all(|s| s.cumulative_growth == 0.0));
    }

    #[test]
    fn test_balance_never_decreases() {
        let input = ProjectionInput::new(0.0, 100.0, 5.0, 120);
        let result = project(&input).unwrap();

        for pair in result.monthly_series.windows(2) {
            assert!(pair[1].balance >= pair[0].balance);
        }
    }

    #[test]
    fn test_summary_matches_materialized_result() {
        let input = ProjectionInput::new(5_000.0, 300.0, 4.5, 60);
        let full = project(&input).unwrap();
        let streamed = summarize(&input).unwrap();

        assert_eq!(streamed, full.summary());
        assert_abs_diff_eq!(streamed.final_value, full.final_value);
    }

    #[test]
    fn test_steps_report_exact_length() {
        let input = ProjectionInput::new(100.0, 10.0, 3.0, 7);
        let steps = input.steps().unwrap();
        assert_eq!(steps.len(), 7);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(project(&ProjectionInput::new(1_000.0, 100.0, 5.0, 0)).is_err());
        assert!(project(&ProjectionInput::new(-1.0, 100.0, 5.0, 12)).is_err());
        assert!(project(&ProjectionInput::new(1_000.0, -100.0, 5.0, 12)).is_err());
        assert!(project(&ProjectionInput::new(1_000.0, 100.0, -5.0, 12)).is_err());
        assert!(project(&ProjectionInput::new(f64::NAN, 100.0, 5.0, 12)).is_err());
    }
}
