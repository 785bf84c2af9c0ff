//! Public facade of the calendar and leave-eligibility engine.
//!
//! The submission and approval-list flows consume this surface in-process;
//! there is no wire protocol. Every method fetches one snapshot and runs
//! the pure rule functions over it.

use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::CalendarError;
use crate::models::{
    CalendarDayEntry, Campus, DayClassification, LeaveRequestWindow, LeaveType, ValidationResult,
};
use crate::repositories::CalendarRepository;
use crate::services::calendar_store::CalendarStore;
use crate::services::{classifier, duration, range, validation};
use crate::utils::time::{next_day, today_local};

pub struct LeaveEngine {
    store: CalendarStore,
}

impl LeaveEngine {
    pub fn new(repo: Arc<dyn CalendarRepository>, config: EngineConfig) -> Self {
        Self {
            store: CalendarStore::new(repo, config),
        }
    }

    /// Admin-facing calendar CRUD surface; every write invalidates the cache.
    pub fn store(&self) -> &CalendarStore {
        &self.store
    }

    fn config(&self) -> &EngineConfig {
        self.store.config()
    }

    pub async fn classify(
        &self,
        date: NaiveDate,
        campus: &Campus,
    ) -> Result<DayClassification, CalendarError> {
        let snapshot = self.store.snapshot().await?;
        Ok(classifier::classify(&snapshot, date, campus))
    }

    pub async fn is_working_day(
        &self,
        date: NaiveDate,
        campus: &Campus,
    ) -> Result<bool, CalendarError> {
        let snapshot = self.store.snapshot().await?;
        Ok(classifier::is_working_day(&snapshot, date, campus))
    }

    /// Working days in `[from, to]` inclusive.
    pub async fn working_days_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        campus: &Campus,
    ) -> Result<u32, CalendarError> {
        let snapshot = self.store.snapshot().await?;
        range::count_working_days(&snapshot, from, to, campus)
    }

    /// Non-working days in `[from, to]` inclusive, in date order.
    pub async fn blocked_dates_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        campus: &Campus,
    ) -> Result<Vec<NaiveDate>, CalendarError> {
        let snapshot = self.store.snapshot().await?;
        range::blocked_dates_in_range(&snapshot, from, to, campus)
    }

    /// Full verdict for a leave request, with "today" taken from the
    /// configured timezone. Store failures follow the configured failure
    /// policy instead of surfacing as an `Err`.
    pub async fn validate_leave_request(&self, window: &LeaveRequestWindow) -> ValidationResult {
        let today = today_local(&self.config().time_zone);
        self.validate_leave_request_as_of(window, today).await
    }

    /// Same pipeline with an explicit `today`, for deterministic callers.
    pub async fn validate_leave_request_as_of(
        &self,
        window: &LeaveRequestWindow,
        today: NaiveDate,
    ) -> ValidationResult {
        if window.leave_type == LeaveType::Compensation {
            return ValidationResult::valid();
        }
        match self.store.snapshot().await {
            Ok(snapshot) => validation::validate_window(&snapshot, window, today),
            Err(err) => {
                tracing::warn!(error = %err, "validation could not read the calendar");
                validation::unavailable_result(self.config().failure_policy, &err)
            }
        }
    }

    /// Duration string for the submission form. Compensation and
    /// Permission never touch the calendar snapshot.
    pub async fn compute_duration(
        &self,
        leave_type: LeaveType,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
        from_time: Option<&str>,
        to_time: Option<&str>,
        campus: &Campus,
    ) -> Result<String, CalendarError> {
        match leave_type {
            LeaveType::Compensation | LeaveType::Permission => {
                // No snapshot needed; reuse the pure calculator with an
                // empty snapshot to keep one code path.
                let empty = crate::services::snapshot::CalendarSnapshot::new(
                    Vec::new(),
                    Vec::new(),
                    self.config().saturday_policy,
                );
                duration::compute_duration(
                    &empty, leave_type, from_date, to_date, from_time, to_time, campus,
                )
            }
            LeaveType::Leave | LeaveType::OnDuty => {
                let snapshot = self.store.snapshot().await?;
                duration::compute_duration(
                    &snapshot, leave_type, from_date, to_date, from_time, to_time, campus,
                )
            }
        }
    }

    /// Non-working days of `year` for the admin calendar screen.
    pub async fn list_year(
        &self,
        year: i32,
        campus: &Campus,
    ) -> Result<Vec<CalendarDayEntry>, CalendarError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| CalendarError::invalid_input(format!("invalid year: {}", year)))?;

        let snapshot = self.store.snapshot().await?;
        let mut entries = Vec::new();
        let mut cursor = start;
        while cursor.year() == year {
            let classification = classifier::classify(&snapshot, cursor, campus);
            if !classification.is_working() {
                let holiday_name = (classification == DayClassification::Holiday).then(|| {
                    snapshot
                        .holidays_on(cursor, campus)
                        .iter()
                        .map(|h| h.name.clone())
                        .collect::<Vec<_>>()
                        .join(", ")
                });
                entries.push(CalendarDayEntry {
                    date: cursor,
                    classification,
                    holiday_name,
                });
            }
            cursor = next_day(cursor)?;
        }
        Ok(entries)
    }
}
