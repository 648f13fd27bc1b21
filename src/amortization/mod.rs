//! Amortization scheduler for fixed-rate, level-payment loans

mod engine;
mod schedule;

pub use engine::{amortize, summarize, AmortizationInput, AmortizationSteps};
pub use schedule::{AmortizationResult, AmortizationRow, AmortizationSummary};
