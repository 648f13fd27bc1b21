//! Parallel batch solving
//!
//! Scenarios share no state, so a batch is a plain `par_iter` over the requests.

use log::info;
use rayon::prelude::*;

use super::request::ScenarioRequest;
use super::result::ScenarioResult;
use crate::error::Result;

/// Solve every request in parallel; output order matches input order
pub fn solve_batch(requests: &[ScenarioRequest]) -> Vec<Result<ScenarioResult>> {
    info!("solving {} scenarios", requests.len());

    let results: Vec<Result<ScenarioResult>> =
        requests.par_iter().map(|request| request.solve()).collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!("batch complete: {} solved, {} rejected", results.len() - failed, failed);

    results
}
