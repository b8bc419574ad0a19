//! DTOs for the click analytics endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Time-bucketed click analytics for one short link.
///
/// Buckets with zero clicks are omitted, so both series may have gaps.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub short_code: String,
    pub total_clicks: i64,
    pub clicks_by_day: Vec<DayBucket>,
    pub clicks_by_hour: Vec<HourBucket>,
}

/// Clicks on one calendar date (trailing 30 days, ascending).
#[derive(Debug, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub clicks: i64,
}

/// Clicks in one truncated hour (trailing 24 hours, ascending).
#[derive(Debug, Serialize)]
pub struct HourBucket {
    pub hour: DateTime<Utc>,
    pub clicks: i64,
}
