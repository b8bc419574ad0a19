//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its metadata and running click counter.
///
/// Rows are created once and never deleted; the only field that changes
/// after creation is `click_count`.
#[derive(Debug, Clone)]
pub struct Link {
    /// Store-assigned, monotonically increasing id. Input to the encoder.
    pub id: i64,
    /// Globally unique short code: `base62::encode(id)` or a custom code.
    pub short_code: String,
    pub long_url: String,
    /// Denormalized click tally; analytics read the click log instead.
    pub click_count: i64,
    /// `None` means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        click_count: i64,
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            click_count,
            expires_at,
            created_at,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}
