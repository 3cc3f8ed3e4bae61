//! Route definitions for the JobTrack API
//!
//! This module organizes all API routes and applies middleware. Protected
//! routes are the ones whose handlers take an `AuthUser` argument; the
//! extractor rejects the request before the handler runs.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

mod auth;
mod customers;
mod health;
mod jobs;
mod tasks;

#[cfg(test)]
mod auth_tests;

pub use customers::customer_routes;
pub use jobs::job_routes;
pub use tasks::task_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([
                    header::CONTENT_TYPE,
                    HeaderName::from_static(crate::auth::AUTH_TOKEN_HEADER),
                ]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(auth::register))
        .route("/login", post(auth::login))
        .route("/auth", get(auth::current_user))
        .nest("/jobs", jobs::job_routes())
        .nest("/customers", customers::customer_routes())
        .nest("/tasks", tasks::task_routes())
}

/// Parse a path id, reading an unparseable one as "no such record"
fn parse_id(id: &str, resource: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound(format!("{} not found", resource)))
}
