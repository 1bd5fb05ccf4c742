use axum::{http::StatusCode, response::IntoResponse};
use pretty_assertions::assert_eq;

use lessonbook_api::middleware::error_handling::AppError;
use lessonbook_core::errors::BookingError;

#[test]
fn validation_errors_map_to_bad_request() {
    let response =
        AppError(BookingError::Validation("No slot selected".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn conflict_errors_map_to_conflict() {
    let response =
        AppError(BookingError::Conflict("Overlapping lesson".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn not_found_errors_map_to_not_found() {
    let response =
        AppError(BookingError::NotFound("Instructor missing".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn database_errors_map_to_internal_server_error() {
    let response = AppError(BookingError::Database(eyre::eyre!("connection refused")))
        .into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn eyre_reports_convert_to_database_errors() {
    let err: AppError = eyre::eyre!("boom").into();
    assert!(matches!(err.0, BookingError::Database(_)));
}
