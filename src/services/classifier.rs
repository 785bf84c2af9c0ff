//! Day classification rules.
//!
//! Priority order: Saturday override lookup, then the unconditional Sunday
//! rule, then the holiday table, else a working day. Every date gets
//! exactly one classification for a fixed snapshot and campus.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::SaturdayPolicy;
use crate::models::{Campus, DayClassification};
use crate::services::snapshot::CalendarSnapshot;

pub fn classify(
    snapshot: &CalendarSnapshot,
    date: NaiveDate,
    campus: &Campus,
) -> DayClassification {
    match date.weekday() {
        Weekday::Sat => match snapshot.saturday_override(date, campus) {
            Some(record) if !record.is_holiday => DayClassification::SaturdayWorking,
            Some(_) => DayClassification::SaturdayHoliday,
            None => match snapshot.saturday_policy() {
                SaturdayPolicy::HolidayUnlessMarkedWorking => DayClassification::SaturdayHoliday,
                SaturdayPolicy::WorkingUnlessMarkedHoliday => DayClassification::SaturdayWorking,
            },
        },
        // No override can make a Sunday a working day.
        Weekday::Sun => DayClassification::Sunday,
        _ => {
            if snapshot.holidays_on(date, campus).is_empty() {
                DayClassification::Working
            } else {
                DayClassification::Holiday
            }
        }
    }
}

pub fn is_working_day(snapshot: &CalendarSnapshot, date: NaiveDate, campus: &Campus) -> bool {
    classify(snapshot, date, campus).is_working()
}
