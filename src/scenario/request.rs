//! Serializable scenario requests

use serde::{Deserialize, Serialize};

use super::orchestrator;
use super::result::{ScenarioKind, ScenarioResult};
use crate::error::Result;

/// Parameters for one scenario solve, tagged by `"scenario"` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum ScenarioRequest {
    Retirement {
        current_age: u32,
        retirement_age: u32,
        monthly_contribution: f64,
        current_savings: f64,
        expected_return_percent: f64,
    },
    Goal {
        target_amount: f64,
        horizon_months: u32,
        initial_amount: f64,
        expected_return_percent: f64,
    },
    Investment {
        amount: f64,
        period_months: u32,
        expected_return_percent: f64,
    },
    Loan {
        loan_amount: f64,
        term_months: u32,
        annual_rate_percent: f64,
    },
}

impl ScenarioRequest {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            ScenarioRequest::Retirement { .. } => ScenarioKind::Retirement,
            ScenarioRequest::Goal { .. } => ScenarioKind::Goal,
            ScenarioRequest::Investment { .. } => ScenarioKind::Investment,
            ScenarioRequest::Loan { .. } => ScenarioKind::Loan,
        }
    }

    /// Dispatch to the matching scenario
    pub fn solve(&self) -> Result<ScenarioResult> {
        match *self {
            ScenarioRequest::Retirement {
                current_age,
                retirement_age,
                monthly_contribution,
                current_savings,
                expected_return_percent,
            } => orchestrator::retirement(
                current_age,
                retirement_age,
                monthly_contribution,
                current_savings,
                expected_return_percent,
            ),
            ScenarioRequest::Goal {
                target_amount,
                horizon_months,
                initial_amount,
                expected_return_percent,
            } => orchestrator::goal(
                target_amount,
                horizon_months,
                initial_amount,
                expected_return_percent,
            ),
            ScenarioRequest::Investment {
                amount,
                period_months,
                expected_return_percent,
            } => orchestrator::investment(amount, period_months, expected_return_percent),
            ScenarioRequest::Loan {
                loan_amount,
                term_months,
                annual_rate_percent,
            } => orchestrator::loan(loan_amount, term_months, annual_rate_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_json() {
        let request: ScenarioRequest = serde_json::from_str(
            r#"{"scenario":"loan","loan_amount":500000000,"term_months":240,"annual_rate_percent":8.5}"#,
        )
        .unwrap();

        assert_eq!(request.kind(), ScenarioKind::Loan);
        let result = request.solve().unwrap();
        assert_eq!(result.scenario_name, ScenarioKind::Loan);
        assert_eq!(result.months(), 240);
    }

    #[test]
    fn test_unknown_scenario_rejected() {
        let parsed: std::result::Result<ScenarioRequest, _> =
            serde_json::from_str(r#"{"scenario":"budget","amount":1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let parsed: std::result::Result<ScenarioRequest, _> =
            serde_json::from_str(r#"{"scenario":"investment","amount":1000}"#);
        assert!(parsed.is_err());
    }
}
