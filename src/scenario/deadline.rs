//! Converting calendar deadlines into month horizons
//!
//! The solvers only understand month counts. Callers that collect a target date
//! (and default it to one year out) turn it into a horizon here first.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, Result};

/// Deadline used when the caller supplies none: one year from `today`
pub fn default_deadline(today: NaiveDate) -> Result<NaiveDate> {
    today
        .checked_add_months(Months::new(12))
        .ok_or_else(|| EngineError::invalid("deadline", "one year from today is out of range"))
}

/// Whole months from `today` to `deadline`; a trailing partial month is dropped
/// since it would not see a month-end contribution
pub fn horizon_months_until(today: NaiveDate, deadline: NaiveDate) -> Result<u32> {
    if deadline <= today {
        return Err(EngineError::invalid(
            "deadline",
            format!("deadline {} must be after {}", deadline, today),
        ));
    }

    let mut months = (deadline.year() - today.year()) * 12 + deadline.month() as i32
        - today.month() as i32;
    if deadline.day() < today.day() {
        months -= 1;
    }

    if months < 1 {
        return Err(EngineError::invalid(
            "deadline",
            format!("deadline {} must be at least one month after {}", deadline, today),
        ));
    }
    Ok(months as u32)
}
