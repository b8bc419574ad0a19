//! DTOs for the link stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata and counters for one short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    pub click_count: i64,

    /// Whether the code is currently present in the cache layer.
    pub is_cached: bool,
}
