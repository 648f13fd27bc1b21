//! Error types shared by every solver in the crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A precondition on the inputs was violated; raised before any numeric work
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for precondition failures, which callers surface as bad requests
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Reject NaN and infinities
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(EngineError::invalid(field, format!("must be greater than zero, got {}", value)));
    }
    Ok(())
}

pub(crate) fn require_months(field: &'static str, months: u32) -> Result<()> {
    if months == 0 {
        return Err(EngineError::invalid(field, "must be at least one month"));
    }
    Ok(())
}
