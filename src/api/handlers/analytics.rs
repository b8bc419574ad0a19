//! Handler for click analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::{AnalyticsResponse, DayBucket, HourBucket};
use crate::error::AppError;
use crate::state::AppState;

/// Returns time-bucketed click series for a short link.
///
/// # Endpoint
///
/// `GET /api/analytics/{code}`
///
/// # Response
///
/// - `total_clicks` - the running counter on the link
/// - `clicks_by_day` - per-day buckets over the trailing 30 days, ascending
/// - `clicks_by_hour` - per-hour buckets over the trailing 24 hours, ascending
///
/// Buckets with zero clicks are omitted.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.stats_service.analytics(&code).await?;

    Ok(Json(AnalyticsResponse {
        short_code: code,
        total_clicks: analytics.total_clicks,
        clicks_by_day: analytics
            .clicks_by_day
            .into_iter()
            .map(|b| DayBucket {
                date: b.date,
                clicks: b.clicks,
            })
            .collect(),
        clicks_by_hour: analytics
            .clicks_by_hour
            .into_iter()
            .map(|b| HourBucket {
                hour: b.hour,
                clicks: b.clicks,
            })
            .collect(),
    }))
}
