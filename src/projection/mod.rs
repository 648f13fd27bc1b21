//! Accumulation projector for savings, retirement and investment growth

mod state;
mod engine;
mod series;

pub use state::AccumulationState;
pub use engine::{project, summarize, AccumulationSteps, ProjectionInput};
pub use series::{MonthlySnapshot, ProjectionResult, ProjectionSummary};
