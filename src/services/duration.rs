//! Leave-type-specific duration computation.
//!
//! Compensation is a fixed single day. Leave and On-Duty count working
//! days over the range. Permission is a same-day minute slice under the
//! clock-window policy.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CalendarError;
use crate::models::{Campus, LeaveType};
use crate::services::range;
use crate::services::snapshot::CalendarSnapshot;
use crate::utils::time::{format_minutes, parse_hm};

/// Minimum permission slice.
pub const PERMISSION_MIN_MINUTES: i64 = 10;
/// Maximum permission slice.
pub const PERMISSION_MAX_MINUTES: i64 = 120;

fn clock(h: u32, m: u32) -> NaiveTime {
    // Constants in the 0..24/0..60 range; cannot fail.
    NaiveTime::from_hms_opt(h, m, 0).expect("valid clock constant")
}

/// Overall clock window for permission requests.
pub fn permission_window() -> (NaiveTime, NaiveTime) {
    (clock(8, 0), clock(16, 0))
}

/// Permitted start sub-windows: morning and afternoon.
fn start_sub_windows() -> [(NaiveTime, NaiveTime); 2] {
    [(clock(8, 0), clock(11, 0)), (clock(12, 0), clock(15, 0))]
}

fn sub_window_for(start: NaiveTime) -> Option<(NaiveTime, NaiveTime)> {
    start_sub_windows()
        .into_iter()
        .find(|(lo, hi)| start >= *lo && start <= *hi)
}

/// The auto-derived end for a permission starting at `start`:
/// start + 1h, capped at the sub-window boundary.
pub fn derive_permission_end(start: NaiveTime) -> Result<NaiveTime, CalendarError> {
    let (_, window_end) = sub_window_for(start).ok_or_else(|| {
        CalendarError::invalid_time(format!(
            "permission must start between 08:00-11:00 or 12:00-15:00, got {}",
            start.format("%H:%M")
        ))
    })?;
    let plus_hour = start + chrono::Duration::hours(1);
    Ok(plus_hour.min(window_end))
}

/// Validated `"Xh Ym"` duration for a permission time pair.
pub fn permission_duration(from_time: &str, to_time: &str) -> Result<String, CalendarError> {
    let start = parse_hm(from_time)?;
    let end = parse_hm(to_time)?;

    let (window_start, window_end) = permission_window();
    if start < window_start || end > window_end {
        return Err(CalendarError::invalid_time(format!(
            "permission times must fall between {} and {}",
            window_start.format("%H:%M"),
            window_end.format("%H:%M")
        )));
    }
    if end <= start {
        return Err(CalendarError::invalid_time(
            "permission end time must be after the start time".to_string(),
        ));
    }

    let (_, sub_end) = sub_window_for(start).ok_or_else(|| {
        CalendarError::invalid_time(format!(
            "permission must start between 08:00-11:00 or 12:00-15:00, got {}",
            start.format("%H:%M")
        ))
    })?;
    if end > sub_end {
        return Err(CalendarError::invalid_time(format!(
            "permission ending at {} crosses the {} sub-window boundary",
            end.format("%H:%M"),
            sub_end.format("%H:%M")
        )));
    }

    let minutes = (end - start).num_minutes();
    if minutes < PERMISSION_MIN_MINUTES {
        return Err(CalendarError::invalid_time(format!(
            "permission must be at least {} minutes, got {}",
            PERMISSION_MIN_MINUTES, minutes
        )));
    }
    if minutes > PERMISSION_MAX_MINUTES {
        return Err(CalendarError::invalid_time(format!(
            "permission must be at most {} minutes, got {}",
            PERMISSION_MAX_MINUTES, minutes
        )));
    }

    Ok(format_minutes(minutes))
}

/// Human-readable duration for a leave request. `Compensation` ignores the
/// calendar entirely; `Permission` uses the time pair; `Leave`/`OnDuty`
/// count working days over the date range.
pub fn compute_duration(
    snapshot: &CalendarSnapshot,
    leave_type: LeaveType,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
    from_time: Option<&str>,
    to_time: Option<&str>,
    campus: &Campus,
) -> Result<String, CalendarError> {
    match leave_type {
        LeaveType::Compensation => Ok("1 day (compensation)".to_string()),
        LeaveType::Permission => match (from_time, to_time) {
            (Some(from), Some(to)) => permission_duration(from, to),
            _ => Err(CalendarError::invalid_time(
                "permission requests need both a start and an end time".to_string(),
            )),
        },
        LeaveType::Leave | LeaveType::OnDuty => {
            let to = match to_date {
                Some(to) if to != from_date => to,
                _ => return Ok("1 day".to_string()),
            };
            let working = range::count_working_days(snapshot, from_date, to, campus)?;
            let total = range::calendar_days(from_date, to)?;
            Ok(span_duration(working, total))
        }
    }
}

fn span_duration(working_days: u32, calendar_days: i64) -> String {
    if working_days == 0 {
        "No working days".to_string()
    } else if i64::from(working_days) == calendar_days {
        format!("{} days", working_days)
    } else {
        format!(
            "{} working days ({} calendar days)",
            working_days, calendar_days
        )
    }
}
