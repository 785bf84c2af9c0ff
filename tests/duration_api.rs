use chrono::NaiveDate;
use std::sync::Arc;

use leavecal::{
    Campus, CreateHolidayPayload, EngineConfig, HolidayKind, InMemoryCalendarRepository,
    LeaveEngine, LeaveType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn campus() -> Campus {
    Campus::from("main")
}

fn engine() -> (Arc<InMemoryCalendarRepository>, LeaveEngine) {
    let repo = Arc::new(InMemoryCalendarRepository::new());
    let engine = LeaveEngine::new(repo.clone(), EngineConfig::default());
    (repo, engine)
}

#[tokio::test]
async fn compensation_duration_ignores_calendar_and_outages() {
    let (repo, engine) = engine();
    repo.set_unavailable(true);

    let result = engine
        .compute_duration(
            LeaveType::Compensation,
            date(2026, 9, 6),
            Some(date(2026, 9, 13)),
            None,
            None,
            &campus(),
        )
        .await
        .unwrap();
    assert_eq!(result, "1 day (compensation)");
}

#[tokio::test]
async fn leave_without_to_date_is_one_day() {
    let (_, engine) = engine();
    let result = engine
        .compute_duration(LeaveType::Leave, date(2026, 9, 2), None, None, None, &campus())
        .await
        .unwrap();
    assert_eq!(result, "1 day");
}

#[tokio::test]
async fn leave_span_annotates_calendar_days_when_they_differ() {
    let (_, engine) = engine();
    engine
        .store()
        .create_holiday(CreateHolidayPayload {
            date: date(2026, 9, 8),
            name: "Founders Day".into(),
            kind: HolidayKind::University,
            is_recurring: false,
            campus: None,
        })
        .await
        .unwrap();

    // Wed 2026-09-02 .. Tue 2026-09-08: weekend + holiday inside
    let result = engine
        .compute_duration(
            LeaveType::Leave,
            date(2026, 9, 2),
            Some(date(2026, 9, 8)),
            None,
            None,
            &campus(),
        )
        .await
        .unwrap();
    assert_eq!(result, "4 working days (7 calendar days)");
}

#[tokio::test]
async fn weekend_only_on_duty_span_has_no_working_days() {
    let (_, engine) = engine();
    let result = engine
        .compute_duration(
            LeaveType::OnDuty,
            date(2026, 9, 5),
            Some(date(2026, 9, 6)),
            None,
            None,
            &campus(),
        )
        .await
        .unwrap();
    assert_eq!(result, "No working days");
}

#[tokio::test]
async fn permission_duration_happy_path_and_rejections() {
    let (repo, engine) = engine();
    // Permission never reads the calendar.
    repo.set_unavailable(true);
    let d = date(2026, 9, 2);

    let ok = engine
        .compute_duration(
            LeaveType::Permission,
            d,
            None,
            Some("09:00"),
            Some("09:45"),
            &campus(),
        )
        .await
        .unwrap();
    assert_eq!(ok, "45m");

    let too_short = engine
        .compute_duration(
            LeaveType::Permission,
            d,
            None,
            Some("09:00"),
            Some("09:05"),
            &campus(),
        )
        .await
        .unwrap_err();
    assert!(too_short.to_string().contains("at least 10 minutes"));

    let crosses = engine
        .compute_duration(
            LeaveType::Permission,
            d,
            None,
            Some("09:00"),
            Some("11:30"),
            &campus(),
        )
        .await
        .unwrap_err();
    assert!(crosses.to_string().contains("sub-window"));

    let missing = engine
        .compute_duration(LeaveType::Permission, d, None, Some("09:00"), None, &campus())
        .await
        .unwrap_err();
    assert!(missing.to_string().contains("both a start and an end time"));
}
