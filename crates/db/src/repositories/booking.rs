//! Booking persistence, including the atomic batch commit.
//!
//! `create_bookings_atomic` is the one write path that creates bookings.
//! It runs in a single transaction and re-validates every requested
//! interval against the instructor's and the student's active bookings,
//! so a client whose earlier availability read has gone stale is rejected
//! instead of double-booked. Either every request in the batch becomes a
//! confirmed booking or the transaction rolls back and none do.

use crate::models::DbBooking;
use chrono::{DateTime, Utc};
use eyre::Result;
use lessonbook_core::models::booking::BookingRequest;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Result of an atomic batch create: all bookings, or the first conflict
/// found during server-side re-validation (in which case nothing was
/// written).
#[derive(Debug)]
pub enum BatchCreateOutcome {
    Created(Vec<DbBooking>),
    Conflict {
        instructor_id: Uuid,
        start_time: DateTime<Utc>,
        reason: String,
    },
}

const ACTIVE_OVERLAP_FOR_INSTRUCTOR: &str = r#"
    SELECT id, instructor_id, student_id, scheduled_time, duration_minutes,
           status, pickup_address, notes, cancellation_fee, created_at
    FROM bookings
    WHERE instructor_id = $1
      AND status NOT IN ('cancelled', 'rescheduled')
      AND scheduled_time < $3
      AND scheduled_time + make_interval(mins => duration_minutes) > $2
    LIMIT 1
"#;

const ACTIVE_OVERLAP_FOR_STUDENT: &str = r#"
    SELECT id, instructor_id, student_id, scheduled_time, duration_minutes,
           status, pickup_address, notes, cancellation_fee, created_at
    FROM bookings
    WHERE student_id = $1
      AND status NOT IN ('cancelled', 'rescheduled')
      AND scheduled_time < $3
      AND scheduled_time + make_interval(mins => duration_minutes) > $2
    LIMIT 1
"#;

pub async fn create_bookings_atomic(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    requests: &[BookingRequest],
) -> Result<BatchCreateOutcome> {
    let mut tx = pool.begin().await?;

    // Lock the instructor rows up front, in sorted order to avoid
    // deadlocks between concurrent batches. This serializes competing
    // commits for the same instructor, so two students cannot both pass
    // the overlap re-validation for one slot.
    let mut instructor_ids: Vec<Uuid> = requests.iter().map(|r| r.instructor_id).collect();
    instructor_ids.sort();
    instructor_ids.dedup();
    for instructor_id in &instructor_ids {
        sqlx::query("SELECT id FROM instructors WHERE id = $1 FOR UPDATE")
            .bind(instructor_id)
            .execute(&mut *tx)
            .await?;
    }

    // Re-validate and insert one request at a time so later requests in
    // the batch also see the rows inserted by earlier ones; a batch whose
    // own selections overlap is rejected here too.
    let mut created = Vec::with_capacity(requests.len());
    for request in requests {
        let end_time = request.start_time
            + chrono::Duration::minutes(i64::from(request.duration_minutes));

        let instructor_overlap = sqlx::query_as::<_, DbBooking>(ACTIVE_OVERLAP_FOR_INSTRUCTOR)
            .bind(request.instructor_id)
            .bind(request.start_time)
            .bind(end_time)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(existing) = instructor_overlap {
            tracing::info!(
                "Batch commit rejected: instructor {} already booked at {}",
                request.instructor_id,
                existing.scheduled_time
            );
            tx.rollback().await?;
            return Ok(BatchCreateOutcome::Conflict {
                instructor_id: request.instructor_id,
                start_time: request.start_time,
                reason: format!(
                    "Instructor is already booked at {}",
                    existing.scheduled_time.format("%Y-%m-%d %H:%M")
                ),
            });
        }

        let student_overlap = sqlx::query_as::<_, DbBooking>(ACTIVE_OVERLAP_FOR_STUDENT)
            .bind(student_id)
            .bind(request.start_time)
            .bind(end_time)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(existing) = student_overlap {
            tx.rollback().await?;
            return Ok(BatchCreateOutcome::Conflict {
                instructor_id: request.instructor_id,
                start_time: request.start_time,
                reason: format!(
                    "You already have a lesson at {} with instructor {}",
                    existing.scheduled_time.format("%Y-%m-%d %H:%M"),
                    existing.instructor_id
                ),
            });
        }

        let booking = sqlx::query_as::<_, DbBooking>(
            r#"
            INSERT INTO bookings
                (id, instructor_id, student_id, scheduled_time, duration_minutes,
                 status, pickup_address, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, 'confirmed', $6, $7, NOW())
            RETURNING id, instructor_id, student_id, scheduled_time, duration_minutes,
                      status, pickup_address, notes, cancellation_fee, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.instructor_id)
        .bind(student_id)
        .bind(request.start_time)
        .bind(request.duration_minutes as i32)
        .bind(&request.pickup_address)
        .bind(&request.notes)
        .fetch_one(&mut *tx)
        .await?;
        created.push(booking);
    }

    tx.commit().await?;
    tracing::info!(
        "Batch commit created {} bookings for student {}",
        created.len(),
        student_id
    );

    Ok(BatchCreateOutcome::Created(created))
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, instructor_id, student_id, scheduled_time, duration_minutes,
               status, pickup_address, notes, cancellation_fee, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// The student's active future bookings across all instructors.
pub async fn get_active_bookings_by_student(
    pool: &Pool<Postgres>,
    student_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, instructor_id, student_id, scheduled_time, duration_minutes,
               status, pickup_address, notes, cancellation_fee, created_at
        FROM bookings
        WHERE student_id = $1
          AND status NOT IN ('cancelled', 'rescheduled')
          AND scheduled_time + make_interval(mins => duration_minutes) > NOW()
        ORDER BY scheduled_time ASC
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Confirmed bookings for an instructor inside `[range_start, range_end)`,
/// the input to slot `is_booked` marking.
pub async fn get_confirmed_bookings_for_instructor(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, instructor_id, student_id, scheduled_time, duration_minutes,
               status, pickup_address, notes, cancellation_fee, created_at
        FROM bookings
        WHERE instructor_id = $1
          AND status = 'confirmed'
          AND scheduled_time < $3
          AND scheduled_time + make_interval(mins => duration_minutes) > $2
        ORDER BY scheduled_time ASC
        "#,
    )
    .bind(instructor_id)
    .bind(range_start)
    .bind(range_end)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn cancel_booking(
    pool: &Pool<Postgres>,
    id: Uuid,
    cancellation_fee: f64,
) -> Result<Option<DbBooking>> {
    tracing::debug!("Cancelling booking {} with fee {}", id, cancellation_fee);

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET status = 'cancelled', cancellation_fee = $2
        WHERE id = $1 AND status NOT IN ('cancelled', 'rescheduled')
        RETURNING id, instructor_id, student_id, scheduled_time, duration_minutes,
                  status, pickup_address, notes, cancellation_fee, created_at
        "#,
    )
    .bind(id)
    .bind(cancellation_fee)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
