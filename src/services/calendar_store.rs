//! Cached access to the calendar persistence layer.
//!
//! The store holds one in-memory snapshot of the full holiday/override
//! superset, keyed only by wall-clock freshness. The snapshot is replaced
//! atomically; `invalidate` is the only cache mutator and every write path
//! calls it before returning, so a validation issued after a write always
//! observes the new state. When the backing store is unreachable, reads
//! fall back to the last-known-good snapshot where one exists.

use chrono::{Datelike, NaiveDate, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::config::EngineConfig;
use crate::error::CalendarError;
use crate::models::{
    Campus, CreateHolidayPayload, Holiday, SaturdayOverride, UpdateHolidayPayload,
};
use crate::repositories::CalendarRepository;
use crate::services::snapshot::CalendarSnapshot;
use crate::types::HolidayId;

struct CachedSnapshot {
    snapshot: Arc<CalendarSnapshot>,
    fetched_at: Instant,
}

pub struct CalendarStore {
    repo: Arc<dyn CalendarRepository>,
    config: EngineConfig,
    cache: RwLock<Option<CachedSnapshot>>,
}

impl CalendarStore {
    pub fn new(repo: Arc<dyn CalendarRepository>, config: EngineConfig) -> Self {
        Self {
            repo,
            config,
            cache: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_hours * 3600)
    }

    fn cached(&self, max_age: Option<Duration>) -> Option<Arc<CalendarSnapshot>> {
        let guard = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().and_then(|entry| match max_age {
            Some(limit) if entry.fetched_at.elapsed() > limit => None,
            _ => Some(Arc::clone(&entry.snapshot)),
        })
    }

    /// Current calendar snapshot, served from cache while fresh.
    pub async fn snapshot(&self) -> Result<Arc<CalendarSnapshot>, CalendarError> {
        if let Some(snapshot) = self.cached(Some(self.ttl())) {
            tracing::debug!("calendar cache hit");
            return Ok(snapshot);
        }

        match self.refresh().await {
            Ok(snapshot) => Ok(snapshot),
            Err(err) if err.is_unavailable() => {
                // Stale data beats no data for read paths; writes never
                // touch this branch.
                if let Some(stale) = self.cached(None) {
                    tracing::warn!(error = %err, "calendar store unreachable, serving stale snapshot");
                    Ok(stale)
                } else {
                    Err(err)
                }
            }
            Err(err) => Err(err),
        }
    }

    async fn refresh(&self) -> Result<Arc<CalendarSnapshot>, CalendarError> {
        let holidays = self.repo.fetch_holidays().await?;
        let overrides = self.repo.fetch_saturday_overrides().await?;
        let snapshot = Arc::new(CalendarSnapshot::new(
            holidays,
            overrides,
            self.config.saturday_policy,
        ));

        tracing::debug!(
            holidays = snapshot.holiday_count(),
            overrides = snapshot.override_count(),
            "calendar cache refreshed"
        );

        let mut guard = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(CachedSnapshot {
            snapshot: Arc::clone(&snapshot),
            fetched_at: Instant::now(),
        });
        Ok(snapshot)
    }

    /// Drops the cached snapshot so the next read is guaranteed fresh.
    pub fn invalidate(&self) {
        let mut guard = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
        tracing::info!("calendar cache invalidated");
    }

    /// Holidays observed in `year`, recurring ones included.
    pub async fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot
            .holidays_for_year(year)
            .into_iter()
            .cloned()
            .collect())
    }

    /// The Saturday override in force for `(date, campus)`, if any.
    pub async fn saturday_override(
        &self,
        date: NaiveDate,
        campus: &Campus,
    ) -> Result<Option<SaturdayOverride>, CalendarError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.saturday_override(date, campus).cloned())
    }

    pub async fn create_holiday(
        &self,
        payload: CreateHolidayPayload,
    ) -> Result<Holiday, CalendarError> {
        let snapshot = self.snapshot().await?;
        let duplicate = snapshot
            .holidays_for_year(payload.date.year())
            .into_iter()
            .any(|h| h.falls_on(payload.date) && h.campus == payload.campus);
        if duplicate {
            return Err(CalendarError::DuplicateHoliday(payload.date));
        }

        let holiday = Holiday::new(
            payload.date,
            payload.name,
            payload.kind,
            payload.is_recurring,
            payload.campus,
        );
        self.repo.insert_holiday(&holiday).await?;
        self.invalidate();
        tracing::info!(id = %holiday.id, date = %holiday.date, "holiday created");
        Ok(holiday)
    }

    pub async fn update_holiday(
        &self,
        id: HolidayId,
        payload: UpdateHolidayPayload,
    ) -> Result<Holiday, CalendarError> {
        let snapshot = self.snapshot().await?;
        let mut holiday = snapshot
            .find_holiday(id)
            .cloned()
            .ok_or(CalendarError::HolidayNotFound(id))?;

        holiday.date = payload.date;
        holiday.year = payload.date.year();
        holiday.name = payload.name;
        holiday.kind = payload.kind;
        holiday.is_recurring = payload.is_recurring;
        holiday.campus = payload.campus;
        holiday.updated_at = Utc::now();

        let affected = self.repo.update_holiday(&holiday).await?;
        if affected == 0 {
            return Err(CalendarError::HolidayNotFound(id));
        }
        self.invalidate();
        tracing::info!(id = %holiday.id, date = %holiday.date, "holiday updated");
        Ok(holiday)
    }

    pub async fn delete_holiday(&self, id: HolidayId) -> Result<(), CalendarError> {
        let affected = self.repo.delete_holiday(id).await?;
        if affected == 0 {
            return Err(CalendarError::HolidayNotFound(id));
        }
        self.invalidate();
        tracing::info!(%id, "holiday deleted");
        Ok(())
    }

    /// Marks a Saturday as a working day for the given campus scope.
    pub async fn set_saturday_working(
        &self,
        date: NaiveDate,
        campus: Option<Campus>,
    ) -> Result<SaturdayOverride, CalendarError> {
        let record = SaturdayOverride::working(date, campus);
        if !record.is_saturday() {
            return Err(CalendarError::invalid_input(format!(
                "{} is not a Saturday",
                date
            )));
        }
        self.repo.upsert_saturday_override(&record).await?;
        self.invalidate();
        tracing::info!(date = %record.date, "saturday marked working");
        Ok(record)
    }

    pub async fn remove_saturday_override(
        &self,
        date: NaiveDate,
        campus: Option<Campus>,
    ) -> Result<(), CalendarError> {
        let affected = self.repo.delete_saturday_override(date, campus).await?;
        if affected == 0 {
            return Err(CalendarError::OverrideNotFound(date));
        }
        self.invalidate();
        tracing::info!(%date, "saturday override removed");
        Ok(())
    }
}
