use crate::models::campus::{scope_applies, Campus};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Administrative decision that a specific Saturday is (or is not) a
/// working day. Absence of an override leaves the configured
/// `SaturdayPolicy` default in force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaturdayOverride {
    pub date: NaiveDate,
    /// No campus means the override applies to all campuses.
    pub campus: Option<Campus>,
    pub is_holiday: bool,
}

impl SaturdayOverride {
    /// Marks `date` as a working Saturday.
    pub fn working(date: NaiveDate, campus: Option<Campus>) -> Self {
        Self {
            date,
            campus,
            is_holiday: false,
        }
    }

    /// Marks `date` as a non-working Saturday.
    pub fn holiday(date: NaiveDate, campus: Option<Campus>) -> Self {
        Self {
            date,
            campus,
            is_holiday: true,
        }
    }

    pub fn applies_to(&self, campus: &Campus) -> bool {
        scope_applies(self.campus.as_ref(), campus)
    }

    pub fn is_saturday(&self) -> bool {
        self.date.weekday() == Weekday::Sat
    }
}
