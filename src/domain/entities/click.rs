//! Click entity representing a single recorded redirect.

use chrono::{DateTime, NaiveDate, Utc};

/// A persisted click event.
///
/// The log is append-only; rows are never updated or deleted. The short code
/// is stored denormalized so analytics queries need no join.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub short_code: String,
    pub clicked_at: DateTime<Utc>,
}

/// Clicks for one calendar date. Dates with zero clicks are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub clicks: i64,
}

/// Clicks for one truncated hour. Hours with zero clicks are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyCount {
    pub hour: DateTime<Utc>,
    pub clicks: i64,
}
