use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use lessonbook_api::handlers::booking::create_booking_batch;
use lessonbook_core::{
    errors::BookingError,
    models::booking::{BookingRequest, CreateBookingBatchRequest},
};
use lessonbook_db::{
    mock::repositories::MockBookingRepo,
    repositories::booking::BatchCreateOutcome,
};

use crate::test_utils::lazy_state;

fn request(start_offset_hours: i64, duration: u32, pickup: &str) -> BookingRequest {
    BookingRequest {
        instructor_id: Uuid::new_v4(),
        start_time: Utc::now() + Duration::hours(start_offset_hours),
        duration_minutes: duration,
        pickup_address: pickup.to_string(),
        notes: None,
    }
}

#[tokio::test]
async fn empty_batch_is_rejected_locally() {
    let payload = CreateBookingBatchRequest {
        student_id: Uuid::new_v4(),
        selections: vec![],
    };

    let err = create_booking_batch(State(lazy_state()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
    assert!(err.0.to_string().contains("No slot selected"));
}

#[tokio::test]
async fn blank_pickup_address_is_rejected_locally() {
    let payload = CreateBookingBatchRequest {
        student_id: Uuid::new_v4(),
        selections: vec![request(24, 60, "  ")],
    };

    let err = create_booking_batch(State(lazy_state()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
    assert!(err.0.to_string().contains("Pickup address"));
}

#[tokio::test]
async fn mixed_durations_are_rejected_locally() {
    let payload = CreateBookingBatchRequest {
        student_id: Uuid::new_v4(),
        selections: vec![
            request(24, 60, "12 High Street"),
            request(48, 90, "12 High Street"),
        ],
    };

    let err = create_booking_batch(State(lazy_state()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
    assert!(err.0.to_string().contains("same duration"));
}

#[tokio::test]
async fn overlapping_selections_within_one_batch_are_a_conflict() {
    let base = request(24, 60, "12 High Street");
    let mut overlapping = request(24, 60, "12 High Street");
    overlapping.start_time = base.start_time + Duration::minutes(30);

    let payload = CreateBookingBatchRequest {
        student_id: Uuid::new_v4(),
        selections: vec![base, overlapping],
    };

    let err = create_booking_batch(State(lazy_state()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Conflict(_)));
    assert!(err.0.to_string().contains("overlap each other"));
}

#[tokio::test]
async fn past_start_time_is_a_conflict() {
    let payload = CreateBookingBatchRequest {
        student_id: Uuid::new_v4(),
        selections: vec![request(-2, 60, "12 High Street")],
    };

    let err = create_booking_batch(State(lazy_state()), Json(payload))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Conflict(_)));
    assert!(err.0.to_string().contains("already passed"));
}

// Repository-level contract: a conflict outcome from the atomic create
// means nothing was written, and the handler surfaces it as a 409-class
// error with the server's reason.
#[tokio::test]
async fn conflict_outcome_carries_server_reason() {
    let mut repo = MockBookingRepo::new();
    let instructor_id = Uuid::new_v4();
    let start_time = Utc::now() + Duration::hours(24);

    repo.expect_create_bookings_atomic().returning(move |_, _| {
        Ok(BatchCreateOutcome::Conflict {
            instructor_id,
            start_time,
            reason: "Instructor is already booked at 2025-06-02 09:00".to_string(),
        })
    });

    let outcome = repo
        .create_bookings_atomic(Uuid::new_v4(), vec![request(24, 60, "12 High Street")])
        .await
        .unwrap();

    match outcome {
        BatchCreateOutcome::Conflict { reason, .. } => {
            let err = BookingError::Conflict(reason);
            assert_eq!(
                err.to_string(),
                "Booking conflict: Instructor is already booked at 2025-06-02 09:00"
            );
        }
        BatchCreateOutcome::Created(_) => panic!("expected a conflict outcome"),
    }
}
