//! Error taxonomy for the calendar engine.
//!
//! Store failures and malformed input surface as `CalendarError` values;
//! domain verdicts (sandwich violations, past dates) are returned inside
//! `ValidationResult` rather than as errors, so callers always get a
//! structured result from the orchestrator.

use crate::types::HolidayId;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    /// The backing calendar store could not be read and no cached
    /// snapshot exists to fall back on.
    #[error("calendar store unavailable: {0}")]
    Unavailable(String),

    #[error("holiday not found: {0}")]
    HolidayNotFound(HolidayId),

    #[error("no Saturday override exists for {0}")]
    OverrideNotFound(NaiveDate),

    #[error("a holiday already exists on {0} for the same campus scope")]
    DuplicateHoliday(NaiveDate),

    /// Malformed or contradictory caller input. Never silently corrected.
    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid time value: {0}")]
    InvalidTime(String),

    #[error("calendar date overflow")]
    DateOverflow,
}

impl CalendarError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CalendarError::InvalidInput(msg.into())
    }

    pub fn invalid_time(msg: impl Into<String>) -> Self {
        CalendarError::InvalidTime(msg.into())
    }

    /// True if the error means the store itself could not be reached,
    /// as opposed to the caller handing us bad input.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CalendarError::Unavailable(_))
    }
}
