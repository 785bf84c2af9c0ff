use crate::models::campus::{scope_applies, Campus};
use crate::types::HolidayId;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    National,
    State,
    University,
    Public,
}

impl HolidayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayKind::National => "national",
            HolidayKind::State => "state",
            HolidayKind::University => "university",
            HolidayKind::Public => "public",
        }
    }
}

impl FromStr for HolidayKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "national" => Ok(HolidayKind::National),
            "state" => Ok(HolidayKind::State),
            "university" => Ok(HolidayKind::University),
            "public" => Ok(HolidayKind::Public),
            _ => Err(()),
        }
    }
}

/// Administrative holiday record. Lifecycle is fully external-write,
/// engine-read-only outside the admin CRUD surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: HolidayId,
    pub date: NaiveDate,
    pub name: String,
    pub kind: HolidayKind,
    pub is_recurring: bool,
    pub year: i32,
    /// No campus means the holiday applies to all campuses.
    pub campus: Option<Campus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holiday {
    pub fn new(
        date: NaiveDate,
        name: String,
        kind: HolidayKind,
        is_recurring: bool,
        campus: Option<Campus>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: HolidayId::new(),
            date,
            name,
            kind,
            is_recurring,
            year: date.year(),
            campus,
            created_at: now,
            updated_at: now,
        }
    }

    /// True when this holiday falls on `date`. A recurring holiday matches
    /// its month/day in every year; a one-off matches only its exact date.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        if self.is_recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }

    /// True when this holiday is observed in `year`.
    pub fn observed_in(&self, year: i32) -> bool {
        self.is_recurring || self.year == year
    }

    pub fn applies_to(&self, campus: &Campus) -> bool {
        scope_applies(self.campus.as_ref(), campus)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHolidayPayload {
    pub date: NaiveDate,
    pub name: String,
    pub kind: HolidayKind,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub campus: Option<Campus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHolidayPayload {
    pub date: NaiveDate,
    pub name: String,
    pub kind: HolidayKind,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub campus: Option<Campus>,
}
