use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::CalendarError;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone. All engine comparisons
/// are date-only; time-of-day never affects classification.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

/// Parses an `HH:MM` clock value.
pub fn parse_hm(value: &str) -> Result<NaiveTime, CalendarError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| CalendarError::invalid_time(format!("expected HH:MM, got {:?}", value)))
}

/// Formats a positive minute count as `"Xh Ym"`, `"Xh"`, or `"Ym"`.
pub fn format_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// The day after `date`, or an overflow error at the calendar boundary.
pub fn next_day(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.succ_opt().ok_or(CalendarError::DateOverflow)
}
