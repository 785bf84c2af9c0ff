//! Calendar repository trait for dependency injection and testing.
//!
//! The backing store (document database, HTTP service) lives behind this
//! trait; it is the only suspending seam in the engine. Use
//! `MockCalendarRepository` in tests to inject failures.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::models::{Campus, Holiday, SaturdayOverride};
use crate::types::HolidayId;

/// Repository trait for calendar persistence.
///
/// Fetches return the full record sets; year and campus filtering happens
/// on the cached superset inside `CalendarStore`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Fetch every holiday record.
    async fn fetch_holidays(&self) -> Result<Vec<Holiday>, CalendarError>;

    /// Fetch every Saturday override record.
    async fn fetch_saturday_overrides(&self) -> Result<Vec<SaturdayOverride>, CalendarError>;

    /// Persist a new holiday.
    async fn insert_holiday(&self, holiday: &Holiday) -> Result<(), CalendarError>;

    /// Replace an existing holiday; returns the number of affected records.
    async fn update_holiday(&self, holiday: &Holiday) -> Result<u64, CalendarError>;

    /// Delete a holiday by ID; returns the number of affected records.
    async fn delete_holiday(&self, id: HolidayId) -> Result<u64, CalendarError>;

    /// Insert or replace the override for `(date, campus)`.
    async fn upsert_saturday_override(
        &self,
        record: &SaturdayOverride,
    ) -> Result<(), CalendarError>;

    /// Delete the override for `(date, campus)`; returns affected records.
    async fn delete_saturday_override(
        &self,
        date: NaiveDate,
        campus: Option<Campus>,
    ) -> Result<u64, CalendarError>;
}
