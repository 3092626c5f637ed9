//! HTTP routes for TOPSIS endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, preview_ranking, submit_ranking, TopsisAppState};

/// Creates the TOPSIS router with all routes.
pub fn topsis_routes(state: TopsisAppState) -> Router {
    Router::new()
        // GET /health
        .route("/health", get(health))
        // POST /api/topsis
        .route("/api/topsis", post(submit_ranking))
        // POST /api/topsis/preview
        .route("/api/topsis/preview", post(preview_ranking))
        .with_state(state)
}
