//! Leave-request validation pipeline.
//!
//! A linear pass: Compensation exemption, date ordering, past-date check,
//! sandwich detection, then non-blocking warnings. Verdicts come back as a
//! structured `ValidationResult`; nothing is thrown across this boundary.

use chrono::NaiveDate;

use crate::config::FailurePolicy;
use crate::error::CalendarError;
use crate::models::{DayClassification, LeaveRequestWindow, LeaveType, ValidationResult};
use crate::services::snapshot::CalendarSnapshot;
use crate::services::{classifier, sandwich};
use crate::utils::time::next_day;

/// Validates a request window against a calendar snapshot, with `today`
/// supplied by the caller (date-only, in the caller's timezone).
pub fn validate_window(
    snapshot: &CalendarSnapshot,
    window: &LeaveRequestWindow,
    today: NaiveDate,
) -> ValidationResult {
    // Compensation exists to grant leave for work already performed on a
    // non-working day; it bypasses every calendar rule.
    if window.leave_type == LeaveType::Compensation {
        return ValidationResult::valid();
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if window.from_date > window.to_date {
        errors.push(format!(
            "From date {} must be on or before the to date {}",
            window.from_date, window.to_date
        ));
        // The range is not iterable; nothing further can be checked.
        return ValidationResult::from_parts(errors, warnings);
    }

    if window.from_date < today {
        errors.push(format!(
            "Cannot request leave starting {} in the past",
            window.from_date
        ));
    }

    if window.leave_type.sandwich_rules_apply() {
        match sandwich::detect(snapshot, window.from_date, window.to_date, &window.campus) {
            Ok(Some(violation)) => errors.push(violation.message()),
            Ok(None) => {}
            Err(err) => errors.push(unable_to_validate(&err)),
        }
    }

    collect_warnings(snapshot, window, &mut errors, &mut warnings);

    ValidationResult::from_parts(errors, warnings)
}

/// Result used when the calendar could not be read at all. Fail-closed
/// blocks the request; fail-open lets it through with an explicit warning.
pub fn unavailable_result(policy: FailurePolicy, err: &CalendarError) -> ValidationResult {
    match policy {
        FailurePolicy::FailClosed => {
            ValidationResult::from_parts(vec![unable_to_validate(err)], Vec::new())
        }
        FailurePolicy::FailOpen => ValidationResult::from_parts(
            Vec::new(),
            vec![format!(
                "Calendar unavailable ({}); eligibility rules were not checked",
                err
            )],
        ),
    }
}

fn unable_to_validate(err: &CalendarError) -> String {
    format!("Unable to validate the request: {}", err)
}

fn collect_warnings(
    snapshot: &CalendarSnapshot,
    window: &LeaveRequestWindow,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    let mut non_working = Vec::new();
    let mut cursor = window.from_date;
    while cursor <= window.to_date {
        match classifier::classify(snapshot, cursor, &window.campus) {
            DayClassification::Holiday => {
                let names: Vec<String> = snapshot
                    .holidays_on(cursor, &window.campus)
                    .iter()
                    .map(|h| h.name.clone())
                    .collect();
                warnings.push(format!(
                    "Request includes a holiday: {} ({})",
                    names.join(", "),
                    cursor
                ));
            }
            DayClassification::Sunday | DayClassification::SaturdayHoliday => {
                non_working.push(cursor.to_string());
            }
            DayClassification::Working | DayClassification::SaturdayWorking => {}
        }
        match next_day(cursor) {
            Ok(next) => cursor = next,
            Err(err) => {
                errors.push(unable_to_validate(&err));
                return;
            }
        }
    }

    if !non_working.is_empty() {
        warnings.push(format!(
            "Request includes non-working days: {}",
            non_working.join(", ")
        ));
    }
}
