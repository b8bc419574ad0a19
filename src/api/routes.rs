//! API route configuration.

use crate::api::handlers::{analytics_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`           - Create a short link
/// - `GET  /stats/{code}`      - Link metadata, click counter, cache state
/// - `GET  /analytics/{code}`  - Daily/hourly click series
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/analytics/{code}", get(analytics_handler))
}
