//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
///
/// These never reach API clients; the cache is a best-effort accelerator
/// and every failure degrades to a database lookup or a skipped write.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching `short_code → long_url` mappings.
///
/// Implementations must be thread-safe and fail open: a broken cache must
/// look like a miss on reads and a no-op on writes, so call sites need no
/// conditional branching.
///
/// Cached entries are not authoritative. Absence does not mean the link
/// does not exist, and presence does not mean the link is still inside its
/// expiration window; the TTL bounds how long a stale entry can live.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - no-op for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the long URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on hit
    /// - `Ok(None)` on miss
    ///
    /// # Errors
    ///
    /// Transport errors may be returned so callers can log them, but callers
    /// must treat them exactly like a miss.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping with a TTL (implementation default when `None`).
    ///
    /// # Errors
    ///
    /// Implementations should log failures and return `Ok(())`; a lost
    /// write only makes the next request slower.
    async fn set_url(
        &self,
        short_code: &str,
        long_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Removes a cached mapping.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, short_code: &str) -> CacheResult<()>;

    /// Reports whether the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
