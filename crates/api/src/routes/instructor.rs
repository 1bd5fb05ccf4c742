use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/instructors/:id/schedule",
            get(handlers::schedule::get_instructor_schedule),
        )
        .route(
            "/api/instructors/:id/slots",
            get(handlers::availability::get_slots),
        )
        .route(
            "/api/instructors/:id/calendar",
            get(handlers::availability::get_calendar),
        )
}
