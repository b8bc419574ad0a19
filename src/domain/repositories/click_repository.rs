//! Repository trait for the click log and its aggregates.

use crate::domain::entities::{DailyCount, HourlyCount};
use crate::error::AppError;
use async_trait::async_trait;

/// Data-access contract for click recording and time-bucketed analytics.
///
/// [`append_click`](Self::append_click) and
/// [`increment_click_count`](Self::increment_click_count) are two independent
/// writes invoked by the background worker; they are not transactionally
/// linked, so a crash between them can leave the log and the counter off by
/// one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one row to the click log with a server-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append_click(&self, short_code: &str) -> Result<(), AppError>;

    /// Increments the link's denormalized click counter by one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_click_count(&self, short_code: &str) -> Result<(), AppError>;

    /// Clicks grouped by calendar date over the trailing `since_days` days,
    /// ascending. Dates with zero clicks are omitted.
    ///
    /// Each call re-queries the log, so repeated calls reflect clicks
    /// recorded in between.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn daily_counts(
        &self,
        short_code: &str,
        since_days: i32,
    ) -> Result<Vec<DailyCount>, AppError>;

    /// Clicks grouped by truncated hour over the trailing `since_hours`
    /// hours, ascending. Hours with zero clicks are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn hourly_counts(
        &self,
        short_code: &str,
        since_hours: i32,
    ) -> Result<Vec<HourlyCount>, AppError>;
}
