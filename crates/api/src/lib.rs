//! # Lessonbook API
//!
//! The API crate provides the web server for the Lessonbook lesson-booking
//! service. It exposes the booking engine over REST: candidate slots and
//! calendar annotations per instructor, a student's active bookings, the
//! atomic batch commit, and cancellation with an engine-computed fee.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic on top of
//!   `lessonbook-core`'s pure engine and `lessonbook-db`'s repositories
//! - **Middleware**: Map the core error taxonomy onto HTTP responses
//! - **Config**: Handle environment configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
}

/// Starts the API server with the provided configuration and database
/// connection.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState { db_pool });

    // Build the application router with all routes
    let app = Router::new()
        .merge(routes::health::routes())
        .merge(routes::instructor::routes())
        .merge(routes::booking::routes())
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()?;
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
