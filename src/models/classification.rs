use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived classification of a single calendar day. Pure function of
/// (date, campus, current calendar state); never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClassification {
    Working,
    Sunday,
    SaturdayHoliday,
    SaturdayWorking,
    Holiday,
}

impl DayClassification {
    /// True for the two classifications that count toward working-day totals.
    pub fn is_working(&self) -> bool {
        matches!(
            self,
            DayClassification::Working | DayClassification::SaturdayWorking
        )
    }
}

/// One row of a year-calendar listing: a non-working day and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayEntry {
    pub date: NaiveDate,
    pub classification: DayClassification,
    /// Holiday name when the classification is `Holiday`.
    pub holiday_name: Option<String>,
}
