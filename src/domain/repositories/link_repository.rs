//! Repository trait for the link store.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Data-access contract for shortened links.
///
/// Creation is two-phase: [`insert_placeholder`](Self::insert_placeholder)
/// obtains the store-assigned id, then
/// [`set_short_code`](Self::set_short_code) persists the final code (derived
/// from that id, or supplied by the caller).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its original long URL.
    ///
    /// Used for best-effort deduplication on create.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new row with an empty placeholder code and returns it with
    /// the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_placeholder(
        &self,
        long_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError>;

    /// Persists the final short code on a placeholder row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_short_code(&self, id: i64, short_code: &str) -> Result<(), AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Connectivity probe used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
