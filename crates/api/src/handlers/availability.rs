//! # Availability Handlers
//!
//! Endpoints that turn an instructor's weekly schedule, time-off, and
//! confirmed bookings into candidate slots and calendar annotations.
//!
//! Slot generation itself lives in `lessonbook_core::availability`; these
//! handlers fetch the inputs, run the pure computation, and optionally
//! classify each slot against the requesting student's own bookings. Any
//! failed fetch collapses into a single "could not determine availability"
//! error so the client never sees a partial slot list.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use lessonbook_core::{
    availability, calendar,
    conflict::{self, SlotStatus},
    errors::BookingError,
    models::{
        booking::Booking,
        schedule::{TimeOffPeriod, WeeklyScheduleEntry},
        slot::{AnnotatedSlot, DaySlotsResponse, GetSlotsResponse},
    },
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Longest slot query window, in days.
const MAX_RANGE_DAYS: i64 = 90;

/// Query parameters for the slot listing endpoint.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_minutes: u32,

    /// Include slots already booked on the instructor's side.
    pub include_booked: Option<bool>,

    /// When present, each slot also carries a conflict classification
    /// against this student's own bookings.
    pub student_id: Option<Uuid>,
}

/// Fetches the three availability inputs, collapsing any failure into one
/// "could not determine availability" error.
async fn fetch_availability_inputs(
    state: &ApiState,
    instructor_id: Uuid,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<(Vec<WeeklyScheduleEntry>, Vec<TimeOffPeriod>, Vec<Booking>), BookingError> {
    let wrap = |e: eyre::Report| {
        BookingError::Database(e.wrap_err("Could not determine availability"))
    };

    let entries =
        lessonbook_db::repositories::schedule::get_schedule_entries_by_instructor(
            &state.db_pool,
            instructor_id,
        )
        .await
        .map_err(wrap)?;

    let time_off = lessonbook_db::repositories::schedule::get_time_off_by_instructor(
        &state.db_pool,
        instructor_id,
    )
    .await
    .map_err(wrap)?;

    let window_start = range_start.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
    let window_end = (range_end + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc());
    let (Some(window_start), Some(window_end)) = (window_start, window_end) else {
        return Err(BookingError::Validation("Invalid date range".to_string()));
    };

    let bookings = lessonbook_db::repositories::booking::get_confirmed_bookings_for_instructor(
        &state.db_pool,
        instructor_id,
        window_start,
        window_end,
    )
    .await
    .map_err(wrap)?;

    Ok((
        entries.into_iter().map(Into::into).collect(),
        time_off.into_iter().map(Into::into).collect(),
        bookings.into_iter().map(Into::into).collect(),
    ))
}

/// Lists candidate slots for a date range, grouped by date.
///
/// # Endpoint
///
/// ```text
/// GET /api/instructors/:id/slots?start_date=2025-06-02&end_date=2025-06-08&duration_minutes=60
/// ```
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<GetSlotsResponse>, AppError> {
    if query.duration_minutes == 0 {
        return Err(AppError(BookingError::Validation(
            "Lesson duration must be positive".to_string(),
        )));
    }
    if query.end_date < query.start_date {
        return Err(AppError(BookingError::Validation(
            "end_date must not be before start_date".to_string(),
        )));
    }
    if (query.end_date - query.start_date).num_days() >= MAX_RANGE_DAYS {
        return Err(AppError(BookingError::Validation(format!(
            "Date range must be shorter than {} days",
            MAX_RANGE_DAYS
        ))));
    }

    let (entries, time_off, instructor_bookings) =
        fetch_availability_inputs(&state, instructor_id, query.start_date, query.end_date).await?;

    // Conflict classification needs the student's own bookings too.
    let student_bookings: Option<Vec<Booking>> = match query.student_id {
        Some(student_id) => {
            let bookings = lessonbook_db::repositories::booking::get_active_bookings_by_student(
                &state.db_pool,
                student_id,
            )
            .await
            .map_err(BookingError::Database)?;
            Some(bookings.into_iter().map(Into::into).collect())
        }
        None => None,
    };

    let include_booked = query.include_booked.unwrap_or(true);
    let now = Utc::now();

    let days = availability::range_slots(
        &entries,
        &time_off,
        &instructor_bookings,
        query.start_date,
        query.end_date,
        query.duration_minutes,
        include_booked,
    )
    .into_iter()
    .map(|(date, slots)| DaySlotsResponse {
        date,
        slots: slots
            .into_iter()
            .map(|slot| {
                let status: Option<SlotStatus> = student_bookings
                    .as_deref()
                    .map(|bookings| conflict::classify(&slot, instructor_id, bookings, now));
                let detail = status.as_ref().and_then(SlotStatus::detail);
                AnnotatedSlot {
                    slot,
                    status,
                    detail,
                }
            })
            .collect(),
    })
    .collect();

    Ok(Json(GetSlotsResponse {
        instructor_id,
        duration_minutes: query.duration_minutes,
        days,
    }))
}

/// Query parameters for the calendar annotation endpoint.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// First annotated date; defaults to today.
    pub start_date: Option<NaiveDate>,

    /// Number of days to annotate; defaults to 90, clamped to 90.
    pub horizon_days: Option<u32>,

    /// Slot duration used for the fully-booked check; defaults to 60.
    pub duration_minutes: Option<u32>,
}

/// Annotates each date in the horizon as no-schedule, time-off,
/// fully-booked, or open.
///
/// # Endpoint
///
/// ```text
/// GET /api/instructors/:id/calendar?start_date=2025-06-02&horizon_days=90
/// ```
#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<calendar::GetCalendarResponse>, AppError> {
    let start_date = query.start_date.unwrap_or_else(|| Utc::now().date_naive());
    let horizon_days = query
        .horizon_days
        .unwrap_or(calendar::DEFAULT_HORIZON_DAYS)
        .clamp(1, calendar::MAX_HORIZON_DAYS);
    let duration_minutes = query.duration_minutes.unwrap_or(60);

    if duration_minutes == 0 {
        return Err(AppError(BookingError::Validation(
            "Lesson duration must be positive".to_string(),
        )));
    }

    let range_end = start_date + Duration::days(i64::from(horizon_days) - 1);
    let (entries, time_off, bookings) =
        fetch_availability_inputs(&state, instructor_id, start_date, range_end).await?;

    let days = calendar::annotate(
        &entries,
        &time_off,
        &bookings,
        start_date,
        horizon_days,
        duration_minutes,
    );

    tracing::debug!(
        "Annotated {} days for instructor {} starting {} (weekday {})",
        days.len(),
        instructor_id,
        start_date,
        start_date.weekday()
    );

    Ok(Json(calendar::GetCalendarResponse {
        instructor_id,
        days,
    }))
}
