//! Scenario orchestration: retirement, goal, investment and loan solves
//!
//! Each scenario validates its own inputs, delegates to one of the solvers and
//! returns the same [`ScenarioResult`] envelope. Requests can be built directly,
//! deserialized from JSON, or loaded from CSV and solved as a parallel batch.
//!
//! # Example
//! ```ignore
//! let result = scenario::loan(500_000_000.0, 240, 8.5)?;
//! println!("pay {:.2} a month", result.monthly_payment.unwrap_or_default());
//! ```

mod batch;
pub mod deadline;
pub mod loader;
mod orchestrator;
mod request;
mod result;

pub use batch::solve_batch;
pub use loader::{load_requests, load_requests_from_reader};
pub use orchestrator::{goal, investment, loan, retirement};
pub use request::ScenarioRequest;
pub use result::{MonthlySeries, ScenarioKind, ScenarioResult};
