use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use uuid::Uuid;

use lessonbook_api::handlers::availability::{get_slots, SlotsQuery};
use lessonbook_core::errors::BookingError;

use crate::test_utils::lazy_state;

fn query(start: &str, end: &str, duration: u32) -> SlotsQuery {
    SlotsQuery {
        start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
        end_date: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
        duration_minutes: duration,
        include_booked: None,
        student_id: None,
    }
}

#[tokio::test]
async fn zero_duration_is_rejected() {
    let err = get_slots(
        State(lazy_state()),
        Path(Uuid::new_v4()),
        Query(query("2025-06-02", "2025-06-08", 0)),
    )
    .await
    .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
    assert!(err.0.to_string().contains("duration"));
}

#[tokio::test]
async fn reversed_date_range_is_rejected() {
    let err = get_slots(
        State(lazy_state()),
        Path(Uuid::new_v4()),
        Query(query("2025-06-08", "2025-06-02", 60)),
    )
    .await
    .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn oversized_date_range_is_rejected() {
    let err = get_slots(
        State(lazy_state()),
        Path(Uuid::new_v4()),
        Query(query("2025-06-02", "2025-12-01", 60)),
    )
    .await
    .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
    assert!(err.0.to_string().contains("Date range"));
}
