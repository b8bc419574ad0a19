//! Cache-aside resolution of short codes.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service answering "what does this short code point to".
///
/// Implements cache-aside: cache lookup first, database fallback on a miss,
/// cache population after a successful fallback. Click recording is handed
/// to the background worker and never blocks the response.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    click_tx: mpsc::Sender<ClickEvent>,
}

impl RedirectService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        click_tx: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            links,
            cache,
            click_tx,
        }
    }

    /// Resolves a short code to its long URL.
    ///
    /// A cache hit is authoritative for "the URL exists and this is the
    /// target" and does not re-check expiration; a stale entry lives at most
    /// one cache TTL. On a miss the store is consulted, expiration is
    /// enforced, and the cache is populated for subsequent requests. A cache
    /// transport error is treated as a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link exists for the code, and
    /// [`AppError::Expired`] when the link is past its `expires_at` (the
    /// cache is not populated in that case).
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        match self.cache.get_url(short_code).await {
            Ok(Some(cached_url)) => {
                self.schedule_click(short_code);
                return Ok(cached_url);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Cache lookup failed for {}: {}", short_code, e);
            }
        }

        let link = self
            .links
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": short_code }))
            })?;

        if link.is_expired() {
            return Err(AppError::expired(
                "Short URL has expired",
                json!({ "code": short_code, "expired_at": link.expires_at }),
            ));
        }

        if let Err(e) = self.cache.set_url(short_code, &link.long_url, None).await {
            warn!("Failed to cache {}: {}", short_code, e);
        }

        self.schedule_click(short_code);
        Ok(link.long_url)
    }

    /// Hands a click event to the background worker without waiting.
    ///
    /// A full queue drops the event; losing a click is preferable to
    /// delaying the redirect.
    fn schedule_click(&self, short_code: &str) {
        if self.click_tx.try_send(ClickEvent::new(short_code)).is_err() {
            debug!("Click queue full, dropping event for {}", short_code);
        }
    }
}
