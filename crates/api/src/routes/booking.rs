use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/students/:id/bookings",
            get(handlers::booking::get_student_bookings),
        )
        .route(
            "/api/bookings/batch",
            post(handlers::booking::create_booking_batch),
        )
        .route(
            "/api/bookings/:id/cancel",
            post(handlers::booking::cancel_booking),
        )
}
