//! The four named scenarios: validate, delegate to a solver, reshape into a `ScenarioResult`

use log::debug;

use super::result::{MonthlySeries, ScenarioKind, ScenarioResult};
use crate::amortization::{amortize, AmortizationInput};
use crate::error::{EngineError, Result};
use crate::goal::{solve_required_contribution, GoalSolverInput};
use crate::projection::{project, ProjectionInput};

/// Project savings from today until retirement.
///
/// `total_returns` is the growth attributable to interest alone:
/// final value less current savings less every monthly contribution.
pub fn retirement(
    current_age: u32,
    retirement_age: u32,
    monthly_contribution: f64,
    current_savings: f64,
    expected_return_percent: f64,
) -> Result<ScenarioResult> {
    if retirement_age <= current_age {
        return Err(EngineError::invalid(
            "retirement_age",
            format!(
                "retirement age must exceed current age ({} <= {})",
                retirement_age, current_age
            ),
        ));
    }
    let horizon_months = (retirement_age - current_age)
        .checked_mul(12)
        .ok_or_else(|| EngineError::invalid("retirement_age", "years to retirement out of range"))?;

    let projection = project(&ProjectionInput::new(
        current_savings,
        monthly_contribution,
        expected_return_percent,
        horizon_months,
    ))?;

    let contributed = monthly_contribution * horizon_months as f64;
    let total_returns = projection.final_value - current_savings - contributed;
    debug!(
        "retirement at {} from {}: {} months, final={:.2}",
        retirement_age, current_age, horizon_months, projection.final_value
    );

    Ok(ScenarioResult::accumulation(
        ScenarioKind::Retirement,
        projection.final_value,
        current_savings + contributed,
        total_returns,
        projection.monthly_series,
    ))
}

/// Solve the contribution needed for a goal, then project the trajectory it produces
pub fn goal(
    target_amount: f64,
    horizon_months: u32,
    initial_amount: f64,
    expected_return_percent: f64,
) -> Result<ScenarioResult> {
    let required = solve_required_contribution(&GoalSolverInput::new(
        target_amount,
        initial_amount,
        expected_return_percent,
        horizon_months,
    ))?;

    let projection = project(&ProjectionInput::new(
        initial_amount,
        required,
        expected_return_percent,
        horizon_months,
    ))?;

    let mut result = ScenarioResult::accumulation(
        ScenarioKind::Goal,
        projection.final_value,
        projection.total_contributed,
        projection.final_value - projection.total_contributed,
        projection.monthly_series,
    );
    result.required_monthly_contribution = Some(required);
    Ok(result)
}

/// Grow a single lump sum with no further contributions
pub fn investment(
    amount: f64,
    period_months: u32,
    expected_return_percent: f64,
) -> Result<ScenarioResult> {
    let projection = project(&ProjectionInput::new(
        amount,
        0.0,
        expected_return_percent,
        period_months,
    ))?;

    Ok(ScenarioResult::accumulation(
        ScenarioKind::Investment,
        projection.final_value,
        amount,
        projection.final_value - amount,
        projection.monthly_series,
    ))
}

/// Repay a loan with level monthly payments.
///
/// The loan ends fully repaid, so `final_amount` is 0. `total_contributions` is the
/// nominal `monthly_payment * term_months`; `total_returns` is the interest paid,
/// negated, since it is a cost to the borrower.
pub fn loan(loan_amount: f64, term_months: u32, annual_rate_percent: f64) -> Result<ScenarioResult> {
    let amortization = amortize(&AmortizationInput::new(
        loan_amount,
        annual_rate_percent,
        term_months,
    ))?;

    Ok(ScenarioResult {
        scenario_name: ScenarioKind::Loan,
        final_amount: 0.0,
        total_contributions: amortization.monthly_payment * term_months as f64,
        total_returns: -amortization.total_interest_paid,
        monthly_series: MonthlySeries::Amortization(amortization.schedule),
        monthly_payment: Some(amortization.monthly_payment),
        total_interest_paid: Some(amortization.total_interest_paid),
        required_monthly_contribution: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_retirement_horizon_and_returns() {
        let result = retirement(30, 60, 5_000_000.0, 50_000_000.0, 8.0).unwrap();

        assert_eq!(result.scenario_name, ScenarioKind::Retirement);
        assert_eq!(result.months(), 360);
        assert_relative_eq!(
            result.total_returns,
            result.final_amount - 50_000_000.0 - 5_000_000.0 * 360.0,
            max_relative = 1e-12
        );
        assert_eq!(result.total_contributions, 50_000_000.0 + 5_000_000.0 * 360.0);
    }

    #[test]
    fn test_retirement_age_must_exceed_current_age() {
        let err = retirement(40, 40, 100.0, 0.0, 5.0).unwrap_err();
        assert!(err.to_string().contains("retirement age must exceed current age"));
        assert!(retirement(50, 45, 100.0, 0.0, 5.0).is_err());
    }

    #[test]
    fn test_goal_reaches_target() {
        let result = goal(200_000_000.0, 36, 20_000_000.0, 6.0).unwrap();
        let required = result.required_monthly_contribution.unwrap();

        assert!(required > 0.0);
        assert_relative_eq!(result.final_amount, 200_000_000.0, max_relative = 1e-9);
        assert_relative_eq!(
            result.total_contributions,
            20_000_000.0 + required * 36.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_goal_returns_are_unclamped_arithmetic() {
        // Zero rate and an already-met goal: no contribution, no growth
        let result = goal(1_000.0, 12, 5_000.0, 0.0).unwrap();

        assert_eq!(result.required_monthly_contribution, Some(0.0));
        assert_eq!(result.final_amount, 5_000.0);
        assert_eq!(result.total_returns, result.final_amount - result.total_contributions);
        assert_eq!(result.total_returns, 0.0);
    }

    #[test]
    fn test_investment_lump_sum() {
        let result = investment(10_000.0, 12, 12.0).unwrap();

        assert_eq!(result.total_contributions, 10_000.0);
        assert_relative_eq!(result.final_amount, 10_000.0 * 1.01f64.powi(12), max_relative = 1e-12);
        assert_relative_eq!(result.total_returns, result.final_amount - 10_000.0);
    }

    #[test]
    fn test_loan_envelope() {
        let result = loan(500_000_000.0, 240, 8.5).unwrap();
        let payment = result.monthly_payment.unwrap();

        assert_eq!(result.final_amount, 0.0);
        assert_eq!(result.total_contributions, payment * 240.0);
        assert_relative_eq!(
            result.total_interest_paid.unwrap(),
            payment * 240.0 - 500_000_000.0,
            max_relative = 1e-9
        );
        assert!(matches!(result.monthly_series, MonthlySeries::Amortization(_)));
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        assert!(matches!(
            investment(1_000.0, 0, 5.0),
            Err(EngineError::InvalidInput { field: "horizon_months", .. })
        ));
        assert!(matches!(
            loan(0.0, 12, 5.0),
            Err(EngineError::InvalidInput { field: "principal", .. })
        ));
        assert!(matches!(
            goal(1_000.0, 0, 0.0, 5.0),
            Err(EngineError::InvalidInput { field: "horizon_months", .. })
        ));
    }
}
