//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::cache::CacheService;

/// Handler state: services plus the handles the health endpoint inspects.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    pub cache: Arc<dyn CacheService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Public base URL used to build `short_url` fields in responses.
    pub base_url: String,
}

impl AppState {
    /// Builds the full short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }
}
