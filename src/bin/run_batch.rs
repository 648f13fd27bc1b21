//! Solve every scenario in a CSV file
//!
//! Prints a one-line summary per row and writes the full results as JSON

use anyhow::{Context, Result};
use clap::Parser;
use finance_projection::scenario::{load_requests, solve_batch};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Solve a CSV file of scenarios in parallel")]
struct Args {
    /// CSV file with one scenario per row
    #[arg(long, default_value = "scenarios.csv")]
    input: PathBuf,

    /// Where to write the JSON results
    #[arg(long, default_value = "scenario_results.json")]
    output: PathBuf,
}

/// One output record per input row
#[derive(Debug, Serialize)]
struct BatchRecord {
    row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<finance_projection::ScenarioResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let requests = load_requests(&args.input)
        .with_context(|| format!("failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", requests.len(), start.elapsed());

    let solve_start = Instant::now();
    let results = solve_batch(&requests);
    println!("Solved in {:?}\n", solve_start.elapsed());

    println!("{:>4} {:<11} {:>18} {:>18} {:>18}", "Row", "Scenario", "Final", "Contributed", "Returns");
    println!("{}", "-".repeat(73));

    let mut records = Vec::with_capacity(results.len());
    for (index, (request, outcome)) in requests.iter().zip(results).enumerate() {
        let row = index + 1;
        match outcome {
            Ok(result) => {
                println!(
                    "{:>4} {:<11} {:>18.2} {:>18.2} {:>18.2}",
                    row,
                    result.scenario_name,
                    result.final_amount,
                    result.total_contributions,
                    result.total_returns
                );
                records.push(BatchRecord { row, result: Some(result), error: None });
            }
            Err(e) => {
                println!("{:>4} {:<11} rejected: {}", row, request.kind(), e);
                records.push(BatchRecord { row, result: None, error: Some(e.to_string()) });
            }
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;

    println!("\nOutput written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
