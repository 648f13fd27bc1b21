//! AWS Lambda handler for scenario solves
//!
//! Accepts a scenario request as JSON and returns the scenario result.
//! Supports Lambda Function URLs for direct HTTP access.
//!
//! Request body:
//! ```json
//! {"scenario": "loan", "loan_amount": 500000000, "term_months": 240, "annual_rate_percent": 8.5}
//! ```
//! An optional `preview_months` field trims the returned monthly series.

use aws_lambda_events::event::lambda_function_urls::{
    LambdaFunctionUrlRequest, LambdaFunctionUrlResponse,
};
use finance_projection::{EngineError, ScenarioRequest, ScenarioResult};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Input body for a solve
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    #[serde(flatten)]
    pub scenario: ScenarioRequest,

    /// Keep only the first N months of the series (default: full series)
    #[serde(default)]
    pub preview_months: Option<usize>,
}

/// Output from a solve
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub result: ScenarioResult,
    pub execution_time_ms: u64,
}

fn response(status: i64, body: Option<String>) -> Result<LambdaFunctionUrlResponse, Error> {
    let mut response = LambdaFunctionUrlResponse {
        status_code: status,
        headers: Default::default(),
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    };
    response.headers.insert("content-type", "application/json".parse()?);
    response.headers.insert("access-control-allow-origin", "*".parse()?);
    response.headers.insert("access-control-allow-methods", "POST, OPTIONS".parse()?);
    response.headers.insert("access-control-allow-headers", "Content-Type".parse()?);
    Ok(response)
}

fn error_response(status: i64, message: &str) -> Result<LambdaFunctionUrlResponse, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    response(status, Some(body))
}

/// Map solver failures to HTTP status codes: bad inputs are the caller's to fix
fn status_for(error: &EngineError) -> i64 {
    if error.is_invalid_input() {
        400
    } else {
        500
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return response(200, None);
    }

    if request.is_base64_encoded {
        return error_response(400, "Request body must be JSON text");
    }
    let body = request.body.as_deref().unwrap_or("{}");

    let solve: SolveRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            return error_response(400, &format!("Invalid JSON: {}", e));
        }
    };

    let mut result = match solve.scenario.solve() {
        Ok(result) => result,
        Err(e) => {
            warn!("{} scenario rejected: {}", solve.scenario.kind(), e);
            return error_response(status_for(&e), &e.to_string());
        }
    };

    if let Some(months) = solve.preview_months {
        result.monthly_series.truncate(months);
    }

    let execution_time_ms = start.elapsed().as_millis() as u64;
    info!("{} scenario solved in {} ms", result.scenario_name, execution_time_ms);

    let body = serde_json::to_string(&SolveResponse {
        result,
        execution_time_ms,
    })?;
    response(200, Some(body))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
