//! # Error Handling Middleware
//!
//! Maps the core error taxonomy onto HTTP status codes and JSON error
//! bodies so every endpoint fails the same way: validation problems are
//! 400s the client can fix immediately, booking conflicts are 409s with
//! instructor/time detail, and service failures are generic 500s after
//! which the client's batch state is still intact (the server never
//! partially commits).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lessonbook_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `Result<T, BookingError>` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on repository results; a raw eyre error is a database error.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}
