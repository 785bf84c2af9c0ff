//! Range analysis: working-day counts and blocked-date listings over an
//! inclusive date range. O(days in range); the snapshot itself is cached,
//! so no memoization at this level.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::models::Campus;
use crate::services::classifier;
use crate::services::snapshot::CalendarSnapshot;
use crate::utils::time::next_day;

fn ensure_ordered(from: NaiveDate, to: NaiveDate) -> Result<(), CalendarError> {
    if from > to {
        Err(CalendarError::invalid_input(format!(
            "from date {} is after to date {}",
            from, to
        )))
    } else {
        Ok(())
    }
}

/// Working days in `[from, to]` inclusive.
pub fn count_working_days(
    snapshot: &CalendarSnapshot,
    from: NaiveDate,
    to: NaiveDate,
    campus: &Campus,
) -> Result<u32, CalendarError> {
    ensure_ordered(from, to)?;
    let mut count = 0;
    let mut cursor = from;
    while cursor <= to {
        if classifier::is_working_day(snapshot, cursor, campus) {
            count += 1;
        }
        cursor = next_day(cursor)?;
    }
    Ok(count)
}

/// Non-working days in `[from, to]` inclusive, in date order.
pub fn blocked_dates_in_range(
    snapshot: &CalendarSnapshot,
    from: NaiveDate,
    to: NaiveDate,
    campus: &Campus,
) -> Result<Vec<NaiveDate>, CalendarError> {
    ensure_ordered(from, to)?;
    let mut blocked = Vec::new();
    let mut cursor = from;
    while cursor <= to {
        if !classifier::is_working_day(snapshot, cursor, campus) {
            blocked.push(cursor);
        }
        cursor = next_day(cursor)?;
    }
    Ok(blocked)
}

/// Calendar days in `[from, to]` inclusive.
pub fn calendar_days(from: NaiveDate, to: NaiveDate) -> Result<i64, CalendarError> {
    ensure_ordered(from, to)?;
    Ok((to - from).num_days() + 1)
}
