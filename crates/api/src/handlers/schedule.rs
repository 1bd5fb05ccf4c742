use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use lessonbook_core::{errors::BookingError, models::schedule::GetInstructorScheduleResponse};

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns an instructor's weekly schedule entries and time-off periods.
#[axum::debug_handler]
pub async fn get_instructor_schedule(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
) -> Result<Json<GetInstructorScheduleResponse>, AppError> {
    // Confirm the instructor exists before returning empty lists.
    lessonbook_db::repositories::instructor::get_instructor_by_id(&state.db_pool, instructor_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Instructor with ID {} not found", instructor_id))
        })?;

    let entries = lessonbook_db::repositories::schedule::get_schedule_entries_by_instructor(
        &state.db_pool,
        instructor_id,
    )
    .await
    .map_err(BookingError::Database)?;

    let time_off = lessonbook_db::repositories::schedule::get_time_off_by_instructor(
        &state.db_pool,
        instructor_id,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(GetInstructorScheduleResponse {
        instructor_id,
        entries: entries.into_iter().map(Into::into).collect(),
        time_off: time_off.into_iter().map(Into::into).collect(),
    }))
}
