//! Load scenario requests from a CSV file
//!
//! One request per row. The `scenario` column picks the kind; only the columns
//! that kind uses need values, the rest may be left empty.

use std::path::Path;

use csv::{Reader, Trim};
use log::info;
use serde::Deserialize;

use super::request::ScenarioRequest;
use super::result::ScenarioKind;
use crate::error::{EngineError, Result};

/// Raw CSV row; every parameter column is optional
#[derive(Debug, Deserialize)]
struct CsvRow {
    scenario: String,
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    monthly_contribution: Option<f64>,
    current_savings: Option<f64>,
    target_amount: Option<f64>,
    horizon_months: Option<u32>,
    initial_amount: Option<f64>,
    amount: Option<f64>,
    period_months: Option<u32>,
    loan_amount: Option<f64>,
    term_months: Option<u32>,
    rate_percent: Option<f64>,
}

fn required<T>(value: Option<T>, field: &'static str, line: usize, scenario: &str) -> Result<T> {
    value.ok_or_else(|| {
        EngineError::invalid(
            field,
            format!("row {}: required for a {} scenario", line, scenario),
        )
    })
}

impl CsvRow {
    fn to_request(self, line: usize) -> Result<ScenarioRequest> {
        let kind = ScenarioKind::from_name(&self.scenario).ok_or_else(|| {
            EngineError::invalid(
                "scenario",
                format!("row {}: unknown scenario '{}'", line, self.scenario.trim()),
            )
        })?;
        let scenario = kind.as_str();
        let rate = required(self.rate_percent, "rate_percent", line, scenario)?;

        match kind {
            ScenarioKind::Retirement => Ok(ScenarioRequest::Retirement {
                current_age: required(self.current_age, "current_age", line, scenario)?,
                retirement_age: required(self.retirement_age, "retirement_age", line, scenario)?,
                monthly_contribution: required(
                    self.monthly_contribution,
                    "monthly_contribution",
                    line,
                    scenario,
                )?,
                current_savings: self.current_savings.unwrap_or(0.0),
                expected_return_percent: rate,
            }),
            ScenarioKind::Goal => Ok(ScenarioRequest::Goal {
                target_amount: required(self.target_amount, "target_amount", line, scenario)?,
                horizon_months: required(self.horizon_months, "horizon_months", line, scenario)?,
                initial_amount: self.initial_amount.unwrap_or(0.0),
                expected_return_percent: rate,
            }),
            ScenarioKind::Investment => Ok(ScenarioRequest::Investment {
                amount: required(self.amount, "amount", line, scenario)?,
                period_months: required(self.period_months, "period_months", line, scenario)?,
                expected_return_percent: rate,
            }),
            ScenarioKind::Loan => Ok(ScenarioRequest::Loan {
                loan_amount: required(self.loan_amount, "loan_amount", line, scenario)?,
                term_months: required(self.term_months, "term_months", line, scenario)?,
                annual_rate_percent: rate,
            }),
        }
    }
}

/// Load all scenario requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioRequest>> {
    let reader = std::fs::File::open(path.as_ref())?;
    let requests = load_requests_from_reader(reader)?;
    info!(
        "loaded {} scenario requests from {}",
        requests.len(),
        path.as_ref().display()
    );
    Ok(requests)
}

/// Load scenario requests from any reader (e.g., string buffer, request body)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ScenarioRequest>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<ScenarioRequest>> {
    let mut requests = Vec::new();

    // Line 1 is the header
    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        requests.push(row.to_request(index + 2)?);
    }

    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "scenario,current_age,retirement_age,monthly_contribution,current_savings,target_amount,horizon_months,initial_amount,amount,period_months,loan_amount,term_months,rate_percent\n";

    #[test]
    fn test_load_mixed_rows() {
        let csv = format!(
            "{}{}{}{}{}",
            HEADER,
            "retirement,30,60,5000000,50000000,,,,,,,,8\n",
            "goal,,,,,200000000,36,20000000,,,,,6\n",
            "investment,,,,,,,,10000,12,,,12\n",
            "loan,,,,,,,,,,500000000,240,8.5\n",
        );
        let requests = load_requests_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(requests.len(), 4);
        assert_eq!(
            requests[3],
            ScenarioRequest::Loan {
                loan_amount: 500_000_000.0,
                term_months: 240,
                annual_rate_percent: 8.5,
            }
        );
        assert!(matches!(
            requests[0],
            ScenarioRequest::Retirement { current_age: 30, retirement_age: 60, .. }
        ));
    }

    #[test]
    fn test_missing_column_names_row_and_field() {
        let csv = format!("{}{}", HEADER, "loan,,,,,,,,,,500000000,,8.5\n");
        let err = load_requests_from_reader(csv.as_bytes()).unwrap_err();

        match err {
            EngineError::InvalidInput { field, reason } => {
                assert_eq!(field, "term_months");
                assert!(reason.contains("row 2"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_scenario() {
        let csv = format!("{}{}", HEADER, "budget,,,,,,,,,,,,5\n");
        assert!(load_requests_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_unknown_scenario_reported_before_missing_rate() {
        let csv = format!("{}{}", HEADER, "budget,,,,,,,,,,,,\n");
        match load_requests_from_reader(csv.as_bytes()).unwrap_err() {
            EngineError::InvalidInput { field, reason } => {
                assert_eq!(field, "scenario");
                assert!(reason.contains("unknown scenario 'budget'"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let csv = format!("{}{}", HEADER, "loan,,,,,,,,,,lots,240,8.5\n");
        let err = load_requests_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::Csv(_)));
        assert!(!err.is_invalid_input());
    }
}
