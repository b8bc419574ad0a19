//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata and the running click counter for a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// `is_cached` reflects whether the code currently sits in the cache layer,
/// which is useful when investigating redirect latency.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.stats(&code).await?;

    Ok(Json(StatsResponse {
        short_url: state.short_url(&stats.link.short_code),
        short_code: stats.link.short_code,
        long_url: stats.link.long_url,
        created_at: stats.link.created_at,
        expires_at: stats.link.expires_at,
        click_count: stats.link.click_count,
        is_cached: stats.is_cached,
    }))
}
