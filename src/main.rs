//! Finance Projection CLI
//!
//! Command-line interface for running retirement, goal, investment and loan scenarios

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use finance_projection::scenario::{deadline, MonthlySeries, ScenarioRequest, ScenarioResult};

#[derive(Parser, Debug)]
#[command(
    name = "finance-projection",
    about = "Savings projections, goal contributions and loan amortization schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the full result as JSON instead of a text summary
    #[arg(long, global = true)]
    json: bool,

    /// Number of months of the series to print in text mode
    #[arg(long, global = true, default_value_t = 12)]
    preview_months: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project savings until retirement
    Retirement {
        #[arg(long)]
        current_age: u32,
        #[arg(long)]
        retirement_age: u32,
        #[arg(long, default_value_t = 0.0)]
        monthly_contribution: f64,
        #[arg(long, default_value_t = 0.0)]
        current_savings: f64,
        #[arg(long, help = "Expected annual return in percent, e.g. 8")]
        expected_return: f64,
    },
    /// Monthly contribution needed to reach a target amount
    Goal {
        #[arg(long)]
        target_amount: f64,
        #[arg(long, conflicts_with = "deadline")]
        horizon_months: Option<u32>,
        #[arg(long, help = "Target date (YYYY-MM-DD); defaults to one year from today")]
        deadline: Option<NaiveDate>,
        #[arg(long, default_value_t = 0.0)]
        initial_amount: f64,
        #[arg(long, help = "Expected annual return in percent, e.g. 6")]
        expected_return: f64,
    },
    /// Growth of a single lump-sum investment
    Investment {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        period_months: u32,
        #[arg(long, help = "Expected annual return in percent, e.g. 7")]
        expected_return: f64,
    },
    /// Level-payment loan repayment schedule
    Loan {
        #[arg(long)]
        loan_amount: f64,
        #[arg(long)]
        term_months: u32,
        #[arg(long, help = "Annual interest rate in percent, e.g. 8.5")]
        annual_rate: f64,
    },
}

impl Command {
    fn into_request(self, today: NaiveDate) -> Result<ScenarioRequest> {
        let request = match self {
            Command::Retirement {
                current_age,
                retirement_age,
                monthly_contribution,
                current_savings,
                expected_return,
            } => ScenarioRequest::Retirement {
                current_age,
                retirement_age,
                monthly_contribution,
                current_savings,
                expected_return_percent: expected_return,
            },
            Command::Goal {
                target_amount,
                horizon_months,
                deadline: target_date,
                initial_amount,
                expected_return,
            } => {
                let horizon_months = match horizon_months {
                    Some(months) => months,
                    None => {
                        let target_date = match target_date {
                            Some(date) => date,
                            None => deadline::default_deadline(today)?,
                        };
                        deadline::horizon_months_until(today, target_date)?
                    }
                };
                ScenarioRequest::Goal {
                    target_amount,
                    horizon_months,
                    initial_amount,
                    expected_return_percent: expected_return,
                }
            }
            Command::Investment {
                amount,
                period_months,
                expected_return,
            } => ScenarioRequest::Investment {
                amount,
                period_months,
                expected_return_percent: expected_return,
            },
            Command::Loan {
                loan_amount,
                term_months,
                annual_rate,
            } => ScenarioRequest::Loan {
                loan_amount,
                term_months,
                annual_rate_percent: annual_rate,
            },
        };
        Ok(request)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();
    let request = cli.command.into_request(today)?;

    let result = request
        .solve()
        .with_context(|| format!("{} scenario rejected", request.kind()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result, cli.preview_months);
    }

    Ok(())
}

fn print_summary(result: &ScenarioResult, preview_months: usize) {
    println!("Scenario: {}", result.scenario_name);
    println!("======================\n");
    println!("  Final Amount:        {:>18.2}", result.final_amount);
    println!("  Total Contributions: {:>18.2}", result.total_contributions);
    println!("  Total Returns:       {:>18.2}", result.total_returns);
    if let Some(required) = result.required_monthly_contribution {
        println!("  Required Monthly:    {:>18.2}", required);
    }
    if let Some(payment) = result.monthly_payment {
        println!("  Monthly Payment:     {:>18.2}", payment);
    }
    if let Some(interest) = result.total_interest_paid {
        println!("  Total Interest Paid: {:>18.2}", interest);
    }
    println!();

    match &result.monthly_series {
        MonthlySeries::Accumulation(rows) => {
            println!("{:>5} {:>18} {:>18} {:>18}", "Month", "Balance", "Contributed", "Growth");
            println!("{}", "-".repeat(62));
            for row in rows.iter().take(preview_months) {
                println!(
                    "{:>5} {:>18.2} {:>18.2} {:>18.2}",
                    row.month_index, row.balance, row.cumulative_contributed, row.cumulative_growth
                );
            }
        }
        MonthlySeries::Amortization(rows) => {
            println!("{:>5} {:>18} {:>18} {:>18}", "Month", "Principal", "Interest", "Remaining");
            println!("{}", "-".repeat(62));
            for row in rows.iter().take(preview_months) {
                println!(
                    "{:>5} {:>18.2} {:>18.2} {:>18.2}",
                    row.month_index, row.principal_portion, row.interest_portion, row.remaining_balance
                );
            }
        }
    }

    if result.months() > preview_months {
        println!("... ({} more months)", result.months() - preview_months);
    }
}
