//! Sandwich detection: leave windows that would illegitimately bridge a
//! holiday or weekend into a longer continuous break.
//!
//! Holiday-adjacency checks run before weekend-bridge checks, and the
//! detector fails fast on the first violation found. Never invoked for
//! Permission or Compensation requests.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::CalendarError;
use crate::models::Campus;
use crate::services::snapshot::CalendarSnapshot;
use crate::utils::time::next_day;

/// Days inspected on each side of the requested window.
const BUFFER_DAYS: u64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SandwichViolation {
    /// Leave requested on both immediate sides of a holiday.
    HolidaySandwich { holiday: String, date: NaiveDate },
    /// Leave placed within two days on both sides of a holiday,
    /// creating an excessive consecutive break.
    ExtendedHolidaySandwich { holiday: String, date: NaiveDate },
    /// Friday and the following Monday requested, bridging the weekend.
    WeekendBridge { friday: NaiveDate, monday: NaiveDate },
}

impl SandwichViolation {
    pub fn message(&self) -> String {
        match self {
            SandwichViolation::HolidaySandwich { holiday, date } => format!(
                "Cannot take leave on both sides of the holiday {} ({})",
                holiday, date
            ),
            SandwichViolation::ExtendedHolidaySandwich { holiday, date } => format!(
                "Requested dates would create an excessive consecutive break around the holiday {} ({})",
                holiday, date
            ),
            SandwichViolation::WeekendBridge { friday, monday } => format!(
                "Cannot bridge the weekend by taking leave on Friday {} and Monday {}",
                friday, monday
            ),
        }
    }
}

impl fmt::Display for SandwichViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Inspects the contiguous window `[from, to]` plus a two-day buffer.
/// Returns the first violation found, or `None` for a clean window.
///
/// A contiguous window that matches the extended two-day pattern always
/// matches the exact one-day pattern too, so the more specific one-day
/// violation is reported when both apply; only the non-contiguous date
/// sets passed to [`detect_for_dates`] can surface the extended variant
/// on its own.
pub fn detect(
    snapshot: &CalendarSnapshot,
    from: NaiveDate,
    to: NaiveDate,
    campus: &Campus,
) -> Result<Option<SandwichViolation>, CalendarError> {
    if from > to {
        return Err(CalendarError::invalid_input(format!(
            "from date {} is after to date {}",
            from, to
        )));
    }

    let mut requested = BTreeSet::new();
    let mut cursor = from;
    while cursor <= to {
        requested.insert(cursor);
        cursor = next_day(cursor)?;
    }

    detect_for_dates(snapshot, &requested, campus)
}

/// Same inspection over an arbitrary set of requested dates. The
/// approval-list UI passes individually picked dates through this form.
pub fn detect_for_dates(
    snapshot: &CalendarSnapshot,
    requested: &BTreeSet<NaiveDate>,
    campus: &Campus,
) -> Result<Option<SandwichViolation>, CalendarError> {
    let (first, last) = match (requested.first(), requested.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(None),
    };

    let buffer_start = first
        .checked_sub_days(Days::new(BUFFER_DAYS))
        .ok_or(CalendarError::DateOverflow)?;
    let buffer_end = last
        .checked_add_days(Days::new(BUFFER_DAYS))
        .ok_or(CalendarError::DateOverflow)?;

    if let Some(violation) =
        holiday_sandwich(snapshot, buffer_start, buffer_end, requested, campus)?
    {
        return Ok(Some(violation));
    }

    Ok(weekend_bridge(requested))
}

fn holiday_sandwich(
    snapshot: &CalendarSnapshot,
    buffer_start: NaiveDate,
    buffer_end: NaiveDate,
    requested: &BTreeSet<NaiveDate>,
    campus: &Campus,
) -> Result<Option<SandwichViolation>, CalendarError> {
    let mut cursor = buffer_start;
    while cursor <= buffer_end {
        if let Some(holiday) = snapshot.holidays_on(cursor, campus).first() {
            let contains = |offset: i64| {
                let date = if offset < 0 {
                    cursor.checked_sub_days(Days::new(offset.unsigned_abs()))
                } else {
                    cursor.checked_add_days(Days::new(offset as u64))
                };
                date.is_some_and(|d| requested.contains(&d))
            };

            let exact = contains(-1) && contains(1);
            let extended = (contains(-1) || contains(-2)) && (contains(1) || contains(2));

            if exact {
                return Ok(Some(SandwichViolation::HolidaySandwich {
                    holiday: holiday.name.clone(),
                    date: cursor,
                }));
            }
            if extended {
                return Ok(Some(SandwichViolation::ExtendedHolidaySandwich {
                    holiday: holiday.name.clone(),
                    date: cursor,
                }));
            }
        }
        cursor = next_day(cursor)?;
    }
    Ok(None)
}

fn weekend_bridge(requested: &BTreeSet<NaiveDate>) -> Option<SandwichViolation> {
    for &date in requested {
        match date.weekday() {
            Weekday::Fri => {
                if let Some(monday) = date.checked_add_days(Days::new(3)) {
                    if requested.contains(&monday) {
                        return Some(SandwichViolation::WeekendBridge {
                            friday: date,
                            monday,
                        });
                    }
                }
            }
            Weekday::Mon => {
                if let Some(friday) = date.checked_sub_days(Days::new(3)) {
                    if requested.contains(&friday) {
                        return Some(SandwichViolation::WeekendBridge {
                            friday,
                            monday: date,
                        });
                    }
                }
            }
            _ => {}
        }
    }
    None
}
