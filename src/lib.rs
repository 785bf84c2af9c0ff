//! Campus leave calendar and eligibility engine.
//!
//! Classifies calendar dates as working or non-working per campus, computes
//! working-day durations for multi-day requests, flags "holiday sandwich"
//! patterns, and produces the duration string and validation verdict used
//! by the request-submission and approval-list flows. Persistence lives
//! behind the [`repositories::CalendarRepository`] trait; everything above
//! it runs over a cached, atomically swapped calendar snapshot.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod types;
pub mod utils;

pub use config::{EngineConfig, FailurePolicy, SaturdayPolicy};
pub use error::CalendarError;
pub use models::{
    CalendarDayEntry, Campus, CreateHolidayPayload, DayClassification, Holiday, HolidayKind,
    LeaveRequestWindow, LeaveType, SaturdayOverride, UpdateHolidayPayload, ValidationResult,
};
pub use repositories::{CalendarRepository, InMemoryCalendarRepository};
pub use services::{CalendarSnapshot, CalendarStore, LeaveEngine, SandwichViolation};
pub use types::HolidayId;
