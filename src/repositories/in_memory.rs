//! In-memory calendar repository for service-level tests and demos:
//! deterministic, no external store, with a switch to simulate an
//! unreachable backend.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use crate::error::CalendarError;
use crate::models::{Campus, Holiday, SaturdayOverride};
use crate::repositories::calendar_repository::CalendarRepository;
use crate::types::HolidayId;

#[derive(Default)]
struct State {
    holidays: Vec<Holiday>,
    overrides: Vec<SaturdayOverride>,
}

/// Deterministic repository backed by process memory.
#[derive(Default)]
pub struct InMemoryCalendarRepository {
    state: Mutex<State>,
    unavailable: AtomicBool,
    fetch_count: AtomicU64,
}

impl InMemoryCalendarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.lock();
            state.holidays = holidays.into_iter().collect();
        }
        repo
    }

    /// Simulate the backing store becoming unreachable (or reachable again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of full fetches served, for cache-behavior assertions.
    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn ensure_available(&self) -> Result<(), CalendarError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(CalendarError::Unavailable(
                "in-memory store marked unavailable".into(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CalendarRepository for InMemoryCalendarRepository {
    async fn fetch_holidays(&self) -> Result<Vec<Holiday>, CalendarError> {
        self.ensure_available()?;
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock().holidays.clone())
    }

    async fn fetch_saturday_overrides(&self) -> Result<Vec<SaturdayOverride>, CalendarError> {
        self.ensure_available()?;
        Ok(self.lock().overrides.clone())
    }

    async fn insert_holiday(&self, holiday: &Holiday) -> Result<(), CalendarError> {
        self.ensure_available()?;
        self.lock().holidays.push(holiday.clone());
        Ok(())
    }

    async fn update_holiday(&self, holiday: &Holiday) -> Result<u64, CalendarError> {
        self.ensure_available()?;
        let mut state = self.lock();
        match state.holidays.iter_mut().find(|h| h.id == holiday.id) {
            Some(existing) => {
                *existing = holiday.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_holiday(&self, id: HolidayId) -> Result<u64, CalendarError> {
        self.ensure_available()?;
        let mut state = self.lock();
        let before = state.holidays.len();
        state.holidays.retain(|h| h.id != id);
        Ok((before - state.holidays.len()) as u64)
    }

    async fn upsert_saturday_override(
        &self,
        record: &SaturdayOverride,
    ) -> Result<(), CalendarError> {
        self.ensure_available()?;
        let mut state = self.lock();
        state
            .overrides
            .retain(|o| !(o.date == record.date && o.campus == record.campus));
        state.overrides.push(record.clone());
        Ok(())
    }

    async fn delete_saturday_override(
        &self,
        date: NaiveDate,
        campus: Option<Campus>,
    ) -> Result<u64, CalendarError> {
        self.ensure_available()?;
        let mut state = self.lock();
        let before = state.overrides.len();
        state.overrides.retain(|o| !(o.date == date && o.campus == campus));
        Ok((before - state.overrides.len()) as u64)
    }
}
