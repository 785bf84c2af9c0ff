use chrono::NaiveDate;
use std::sync::Arc;

use leavecal::{
    Campus, CreateHolidayPayload, EngineConfig, HolidayKind, InMemoryCalendarRepository,
    LeaveEngine,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn campus() -> Campus {
    Campus::from("main")
}

fn engine() -> LeaveEngine {
    LeaveEngine::new(
        Arc::new(InMemoryCalendarRepository::new()),
        EngineConfig::default(),
    )
}

#[tokio::test]
async fn single_working_day_counts_one() {
    let engine = engine();
    // Wednesday
    let d = date(2026, 9, 2);
    assert_eq!(engine.working_days_between(d, d, &campus()).await.unwrap(), 1);
}

#[tokio::test]
async fn single_sunday_counts_zero() {
    let engine = engine();
    let d = date(2026, 9, 6);
    assert_eq!(engine.working_days_between(d, d, &campus()).await.unwrap(), 0);
}

#[tokio::test]
async fn splitting_a_range_preserves_the_total() {
    let engine = engine();
    engine
        .store()
        .create_holiday(CreateHolidayPayload {
            date: date(2026, 9, 10),
            name: "Founders Day".into(),
            kind: HolidayKind::University,
            is_recurring: false,
            campus: None,
        })
        .await
        .unwrap();

    let (a, b) = (date(2026, 9, 1), date(2026, 9, 20));
    let whole = engine.working_days_between(a, b, &campus()).await.unwrap();

    for mid in [date(2026, 9, 5), date(2026, 9, 10), date(2026, 9, 14)] {
        let left = engine.working_days_between(a, mid, &campus()).await.unwrap();
        let right = engine
            .working_days_between(mid.succ_opt().unwrap(), b, &campus())
            .await
            .unwrap();
        assert_eq!(whole, left + right, "split at {}", mid);
    }
}

#[tokio::test]
async fn marked_working_saturday_counts_unmarked_does_not() {
    let repo = Arc::new(InMemoryCalendarRepository::new());
    let engine = LeaveEngine::new(repo.clone(), EngineConfig::default());
    let saturday = date(2026, 9, 5);

    assert_eq!(
        engine
            .working_days_between(saturday, saturday, &campus())
            .await
            .unwrap(),
        0
    );

    engine
        .store()
        .set_saturday_working(saturday, None)
        .await
        .unwrap();

    assert_eq!(
        engine
            .working_days_between(saturday, saturday, &campus())
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn blocked_dates_cover_weekends_and_holidays() {
    let engine = engine();
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

    // Fri 2026-09-04 .. Tue 2026-09-08
    let blocked = engine
        .blocked_dates_between(date(2026, 9, 4), date(2026, 9, 8), &campus())
        .await
        .unwrap();
    assert_eq!(
        blocked,
        vec![date(2026, 9, 5), date(2026, 9, 6), date(2026, 9, 8)]
    );
}

#[tokio::test]
async fn inverted_range_is_an_input_error() {
    let engine = engine();
    let err = engine
        .working_days_between(date(2026, 9, 8), date(2026, 9, 4), &campus())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("after"));
}
