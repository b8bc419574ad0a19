//! Link creation service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use tracing::warn;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::base62;
use crate::utils::url_validator::validate_long_url;

/// Result of a shorten operation.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub link: Link,
    /// True when the long URL was already shortened and the existing link
    /// was returned instead of creating a new row.
    pub already_existed: bool,
}

/// Service for creating shortened links.
///
/// Creation is two-phase: a placeholder row obtains the store-assigned id,
/// then the final code (base62 of the id, or the caller's custom code) is
/// persisted. The new mapping is written through to the cache so the first
/// resolution is a hit.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
}

impl LinkService {
    pub fn new(links: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { links, cache }
    }

    /// Creates a short link, or returns the existing one for a duplicate URL.
    ///
    /// # Arguments
    ///
    /// - `long_url` - The original URL to shorten
    /// - `custom_code` - Optional caller-supplied code; never derived from
    ///   the id and never decoded
    /// - `expires_in` - Optional lifetime in seconds from now
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL, an invalid
    /// custom code, or a non-positive `expires_in`.
    /// Returns [`AppError::Conflict`] when the custom code is already taken;
    /// the conflict is surfaced from the store's unique constraint and is
    /// never retried or auto-suffixed.
    pub async fn shorten(
        &self,
        long_url: String,
        custom_code: Option<String>,
        expires_in: Option<i64>,
    ) -> Result<ShortenOutcome, AppError> {
        let long_url = validate_long_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(code) = &custom_code {
            validate_custom_code(code)?;
        }

        let expires_at = match expires_in {
            Some(seconds) if seconds <= 0 => {
                return Err(AppError::bad_request(
                    "expires_in must be a positive number of seconds",
                    json!({ "expires_in": seconds }),
                ));
            }
            Some(seconds) => Some(Utc::now() + Duration::seconds(seconds)),
            None => None,
        };

        // Best-effort dedup: a custom-code create racing past this check can
        // still produce a second row for the same URL, which is accepted.
        if let Some(existing) = self.links.find_by_long_url(&long_url).await? {
            return Ok(ShortenOutcome {
                link: existing,
                already_existed: true,
            });
        }

        let mut link = self.links.insert_placeholder(&long_url, expires_at).await?;

        let short_code = match custom_code {
            Some(code) => code,
            None => base62::encode(link.id as u64),
        };

        self.links.set_short_code(link.id, &short_code).await?;
        link.short_code = short_code;

        // Write-through so the first resolution is a cache hit. A failed
        // write only makes the next request slower.
        if let Err(e) = self
            .cache
            .set_url(&link.short_code, &link.long_url, None)
            .await
        {
            warn!("Failed to pre-populate cache for {}: {}", link.short_code, e);
        }

        Ok(ShortenOutcome {
            link,
            already_existed: false,
        })
    }

    /// Store connectivity probe used by the health endpoint.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.links.ping().await
    }
}

/// Validates the shape of a caller-supplied custom code.
///
/// Custom codes are opaque identifiers: 1-32 characters of ASCII
/// alphanumerics, hyphen, or underscore.
fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > 32 {
        return Err(AppError::bad_request(
            "Custom code must be 1-32 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
