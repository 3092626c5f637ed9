//! HTTP adapters - REST API implementations.
//!
//! `topsis` exposes the ranking endpoints; [`app_router`] wraps them in the
//! request tracing, timeout, body size and CORS layers configured for the
//! server.

pub mod topsis;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use topsis::topsis_routes;
pub use topsis::{ErrorResponse, TopsisApiError, TopsisAppState};

/// Builds the full application router with middleware applied.
pub fn app_router(state: TopsisAppState, server: &ServerConfig) -> Router {
    topsis_routes(state)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Listed origins when configured, any origin otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
