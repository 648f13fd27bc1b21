//! Finance Projection - projection and amortization engine for personal-finance scenarios
//!
//! This library provides:
//! - Accumulation projections (principal + monthly contribution under monthly compounding)
//! - Level-payment loan amortization schedules
//! - A goal solver for the monthly contribution needed to reach a target
//! - Retirement, goal, investment and loan scenarios behind one result envelope
//!
//! Every solve is a pure function of its inputs, so scenarios can run on any
//! number of threads at once.

pub mod error;
pub mod rates;
pub mod projection;
pub mod amortization;
pub mod goal;
pub mod scenario;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use projection::{project, MonthlySnapshot, ProjectionInput, ProjectionResult};
pub use amortization::{amortize, AmortizationInput, AmortizationResult, AmortizationRow};
pub use goal::{solve_required_contribution, GoalSolverInput};
pub use scenario::{MonthlySeries, ScenarioKind, ScenarioRequest, ScenarioResult};
