//! # Booking Handlers
//!
//! The student's active bookings, the atomic batch commit, and
//! cancellation.
//!
//! Batch commit semantics: validation failures (empty batch, blank pickup
//! address, mixed durations) are rejected here before any database work.
//! Everything that passes validation goes to the database as one
//! transaction that re-validates every interval server-side; either all
//! selections become confirmed bookings or the whole batch fails with a
//! conflict and nothing is written, so the client can keep its selections
//! and retry.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use lessonbook_core::{
    errors::BookingError,
    interval,
    models::{
        booking::{
            BookedLessonResponse, Booking, CancelBookingResponse, CreateBookingBatchRequest,
            CreateBookingBatchResponse, GetStudentBookingsResponse,
        },
        instructor::Instructor,
    },
    pricing,
};
use lessonbook_db::repositories::booking::BatchCreateOutcome;

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the student's active future bookings across all instructors.
#[axum::debug_handler]
pub async fn get_student_bookings(
    State(state): State<Arc<ApiState>>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<GetStudentBookingsResponse>, AppError> {
    let bookings = lessonbook_db::repositories::booking::get_active_bookings_by_student(
        &state.db_pool,
        student_id,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(GetStudentBookingsResponse {
        student_id,
        bookings: bookings.into_iter().map(Booking::from).collect(),
    }))
}

/// Creates a batch of bookings atomically.
///
/// # Endpoint
///
/// ```text
/// POST /api/bookings/batch
/// ```
#[axum::debug_handler]
pub async fn create_booking_batch(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingBatchRequest>,
) -> Result<Json<CreateBookingBatchResponse>, AppError> {
    let now = Utc::now();

    // Local validation first; none of these reach the database.
    if payload.selections.is_empty() {
        return Err(AppError(BookingError::Validation(
            "No slot selected. Select at least one lesson time.".to_string(),
        )));
    }
    if payload
        .selections
        .iter()
        .any(|s| s.pickup_address.trim().is_empty())
    {
        return Err(AppError(BookingError::Validation(
            "Pickup address is required for every selected lesson".to_string(),
        )));
    }
    let duration = payload.selections[0].duration_minutes;
    if duration == 0 {
        return Err(AppError(BookingError::Validation(
            "Lesson duration must be positive".to_string(),
        )));
    }
    if payload
        .selections
        .iter()
        .any(|s| s.duration_minutes != duration)
    {
        return Err(AppError(BookingError::Validation(
            "All lessons in a batch must share the same duration. Please re-select your slots."
                .to_string(),
        )));
    }
    if let Some(past) = payload.selections.iter().find(|s| s.start_time <= now) {
        return Err(AppError(BookingError::Conflict(format!(
            "The selected time {} has already passed",
            past.start_time.format("%Y-%m-%d %H:%M")
        ))));
    }
    for (i, a) in payload.selections.iter().enumerate() {
        let a_end = interval::end_of(a.start_time, a.duration_minutes);
        for b in &payload.selections[i + 1..] {
            let b_end = interval::end_of(b.start_time, b.duration_minutes);
            if interval::overlaps(a.start_time, a_end, b.start_time, b_end) {
                return Err(AppError(BookingError::Conflict(format!(
                    "Selected lessons at {} and {} overlap each other",
                    a.start_time.format("%Y-%m-%d %H:%M"),
                    b.start_time.format("%Y-%m-%d %H:%M")
                ))));
            }
        }
    }

    // Resolve rates for pricing before committing anything.
    let mut instructors: HashMap<Uuid, Instructor> = HashMap::new();
    for selection in &payload.selections {
        if instructors.contains_key(&selection.instructor_id) {
            continue;
        }
        let instructor = lessonbook_db::repositories::instructor::get_instructor_by_id(
            &state.db_pool,
            selection.instructor_id,
        )
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!(
                "Instructor with ID {} not found",
                selection.instructor_id
            ))
        })?;
        instructors.insert(selection.instructor_id, instructor.into());
    }

    let outcome = lessonbook_db::repositories::booking::create_bookings_atomic(
        &state.db_pool,
        payload.student_id,
        &payload.selections,
    )
    .await
    .map_err(BookingError::Database)?;

    let created = match outcome {
        BatchCreateOutcome::Created(bookings) => bookings,
        BatchCreateOutcome::Conflict { reason, .. } => {
            return Err(AppError(BookingError::Conflict(reason)));
        }
    };

    let mut total_price = 0.0;
    let bookings: Vec<BookedLessonResponse> = created
        .into_iter()
        .map(Booking::from)
        .map(|booking| {
            // Every instructor was resolved above; a miss here would mean
            // the transaction created a booking we never asked for.
            let price = instructors
                .get(&booking.instructor_id)
                .map(|i| pricing::lesson_price(i.hourly_rate, i.booking_fee, booking.duration_minutes))
                .unwrap_or(0.0);
            total_price += price;
            BookedLessonResponse {
                id: booking.id,
                instructor_id: booking.instructor_id,
                scheduled_time: booking.scheduled_time,
                duration_minutes: booking.duration_minutes,
                status: booking.status,
                pickup_address: booking.pickup_address,
                price,
            }
        })
        .collect();

    tracing::info!(
        "Student {} booked {} lessons for a total of {:.2}",
        payload.student_id,
        bookings.len(),
        total_price
    );

    Ok(Json(CreateBookingBatchResponse {
        bookings,
        total_price,
    }))
}

/// Cancels a booking, charging the engine-computed cancellation fee.
///
/// The fee is derived strictly from the booking's `scheduled_time` and the
/// server clock: half the lesson rate inside six hours, free otherwise.
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let booking: Booking =
        lessonbook_db::repositories::booking::get_booking_by_id(&state.db_pool, booking_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Booking with ID {} not found", booking_id))
            })?
            .into();

    let instructor = lessonbook_db::repositories::instructor::get_instructor_by_id(
        &state.db_pool,
        booking.instructor_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!(
            "Instructor with ID {} not found",
            booking.instructor_id
        ))
    })?;

    let fee = pricing::cancellation_fee(
        instructor.hourly_rate,
        booking.duration_minutes,
        booking.scheduled_time,
        Utc::now(),
    );

    let cancelled =
        lessonbook_db::repositories::booking::cancel_booking(&state.db_pool, booking_id, fee)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::Conflict("Booking is already cancelled or rescheduled".to_string())
            })?;

    let cancelled: Booking = cancelled.into();
    Ok(Json(CancelBookingResponse {
        id: cancelled.id,
        status: cancelled.status,
        cancellation_fee: cancelled.cancellation_fee.unwrap_or(fee),
    }))
}
