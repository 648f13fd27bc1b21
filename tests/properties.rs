use finance_projection::amortization::{amortize, AmortizationInput};
use finance_projection::goal::{solve_required_contribution, GoalSolverInput};
use finance_projection::projection::{project, ProjectionInput};
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_balance_is_non_decreasing(
        principal in 0u32..5_000_000,
        contribution in 0u32..50_000,
        rate_bp in 0u32..2_000,
        months in 1u32..600,
    ) {
        let input = ProjectionInput::new(
            principal as f64,
            contribution as f64,
            rate_bp as f64 / 100.0,
            months,
        );
        let result = project(&input).unwrap();

        prop_assert_eq!(result.monthly_series.len(), months as usize);
        let mut previous = input.principal;
        for snapshot in &result.monthly_series {
            prop_assert!(snapshot.balance >= previous);
            previous = snapshot.balance;
        }

        let last = result.monthly_series.last().unwrap();
        let tolerance = 1e-9 * result.final_value.max(1.0);
        prop_assert!((result.total_growth - last.cumulative_growth).abs() <= tolerance);
    }

    #[test]
    fn prop_zero_rate_is_exactly_linear(
        principal in 0u32..1_000_000,
        contribution in 0u32..10_000,
        months in 1u32..480,
    ) {
        let input = ProjectionInput::new(principal as f64, contribution as f64, 0.0, months);
        let result = project(&input).unwrap();
        prop_assert_eq!(
            result.final_value,
            principal as f64 + contribution as f64 * months as f64
        );
    }

    #[test]
    fn prop_loan_principal_is_conserved(
        principal in 1u32..2_000_000_000,
        rate_bp in 0u32..3_000,
        term in 1u32..480,
    ) {
        let input = AmortizationInput::new(principal as f64, rate_bp as f64 / 100.0, term);
        let result = amortize(&input).unwrap();

        prop_assert!(result.schedule.len() <= term as usize);
        prop_assert_eq!(result.final_balance(), 0.0);
        prop_assert!((result.total_principal_paid - input.principal).abs() <= result.monthly_payment);

        let mut previous = input.principal;
        for row in &result.schedule {
            prop_assert!(row.remaining_balance < previous);
            prop_assert!(row.remaining_balance >= 0.0);
            previous = row.remaining_balance;
        }
    }

    #[test]
    fn prop_goal_contribution_round_trips(
        target in 1_000u32..500_000_000,
        initial in 0u32..100_000,
        rate_bp in 0u32..1_500,
        months in 1u32..480,
    ) {
        let goal = GoalSolverInput::new(target as f64, initial as f64, rate_bp as f64 / 100.0, months);
        let required = solve_required_contribution(&goal).unwrap();
        prop_assert!(required >= 0.0);

        let projected = project(&ProjectionInput::new(
            initial as f64,
            required,
            goal.annual_rate_percent,
            months,
        ))
        .unwrap();

        if required > 0.0 {
            let tolerance = 1e-6 * goal.target_amount;
            prop_assert!((projected.final_value - goal.target_amount).abs() <= tolerance);
        } else {
            prop_assert!(projected.final_value >= goal.target_amount * (1.0 - 1e-9));
        }
    }
}
