//! Shared test harness: in-memory repository and cache fakes plus a
//! fully wired [`TestServer`].
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde_json::json;
use tokio::sync::mpsc;

use hopline::AppState;
use hopline::application::services::{LinkService, RedirectService, StatsService};
use hopline::domain::click_event::ClickEvent;
use hopline::domain::click_worker::run_click_worker;
use hopline::domain::entities::{DailyCount, HourlyCount, Link};
use hopline::domain::repositories::{ClickRepository, LinkRepository};
use hopline::error::AppError;
use hopline::infrastructure::cache::{CacheResult, CacheService};
use hopline::routes::router;

pub const BASE_URL: &str = "http://localhost:3000";

/// Backing data shared by the link and click repository fakes.
#[derive(Default)]
struct StoreInner {
    links: Vec<Link>,
    clicks: Vec<(String, DateTime<Utc>)>,
    next_id: i64,
}

/// In-memory stand-in for PostgreSQL.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
    find_by_code_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of `find_by_code` lookups served so far. Lets tests assert
    /// that cache hits never reach the store.
    pub fn find_by_code_calls(&self) -> usize {
        self.find_by_code_calls.load(Ordering::SeqCst)
    }

    /// Inserts a click row with an explicit timestamp, for analytics tests
    /// that need clicks spread across buckets.
    pub fn append_click_at(&self, short_code: &str, clicked_at: DateTime<Utc>) {
        let mut inner = self.inner.lock().unwrap();
        inner.clicks.push((short_code.to_string(), clicked_at));
    }

    /// Seeds a link row directly, bypassing the create path. Useful for
    /// states the API refuses to produce, such as an already expired link.
    pub fn insert_link(&self, link: Link) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = inner.next_id.max(link.id);
        inner.links.push(link);
    }

    pub fn link_by_code(&self, short_code: &str) -> Option<Link> {
        let inner = self.inner.lock().unwrap();
        inner
            .links
            .iter()
            .find(|l| l.short_code == short_code)
            .cloned()
    }

    pub fn click_rows(&self) -> usize {
        self.inner.lock().unwrap().clicks.len()
    }
}

pub struct MemoryLinkRepository {
    store: Arc<MemoryStore>,
}

impl MemoryLinkRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let inner = self.store.inner.lock().unwrap();
        Ok(inner
            .links
            .iter()
            .find(|l| l.long_url == long_url && !l.short_code.is_empty())
            .cloned())
    }

    async fn insert_placeholder(
        &self,
        long_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        let mut inner = self.store.inner.lock().unwrap();
        inner.next_id += 1;
        let link = Link::new(
            inner.next_id,
            String::new(),
            long_url.to_string(),
            0,
            expires_at,
            Utc::now(),
        );
        inner.links.push(link.clone());
        Ok(link)
    }

    async fn set_short_code(&self, id: i64, short_code: &str) -> Result<(), AppError> {
        let mut inner = self.store.inner.lock().unwrap();
        if inner.links.iter().any(|l| l.short_code == short_code) {
            return Err(AppError::conflict(
                "Short code already in use",
                json!({ "short_code": short_code }),
            ));
        }
        let row = inner
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::internal("Placeholder row missing", json!({ "id": id })))?;
        row.short_code = short_code.to_string();
        Ok(())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        self.store.find_by_code_calls.fetch_add(1, Ordering::SeqCst);
        let inner = self.store.inner.lock().unwrap();
        Ok(inner
            .links
            .iter()
            .find(|l| l.short_code == short_code)
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct MemoryClickRepository {
    store: Arc<MemoryStore>,
}

impl MemoryClickRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn append_click(&self, short_code: &str) -> Result<(), AppError> {
        self.store.append_click_at(short_code, Utc::now());
        Ok(())
    }

    async fn increment_click_count(&self, short_code: &str) -> Result<(), AppError> {
        let mut inner = self.store.inner.lock().unwrap();
        if let Some(row) = inner.links.iter_mut().find(|l| l.short_code == short_code) {
            row.click_count += 1;
        }
        Ok(())
    }

    async fn daily_counts(
        &self,
        short_code: &str,
        since_days: i32,
    ) -> Result<Vec<DailyCount>, AppError> {
        let cutoff = Utc::now() - TimeDelta::days(since_days as i64);
        let inner = self.store.inner.lock().unwrap();
        let mut buckets = BTreeMap::new();
        for (code, at) in &inner.clicks {
            if code == short_code && *at >= cutoff {
                *buckets.entry(at.date_naive()).or_insert(0i64) += 1;
            }
        }
        Ok(buckets
            .into_iter()
            .map(|(date, clicks)| DailyCount { date, clicks })
            .collect())
    }

    async fn hourly_counts(
        &self,
        short_code: &str,
        since_hours: i32,
    ) -> Result<Vec<HourlyCount>, AppError> {
        let cutoff = Utc::now() - TimeDelta::hours(since_hours as i64);
        let inner = self.store.inner.lock().unwrap();
        let mut buckets = BTreeMap::new();
        for (code, at) in &inner.clicks {
            if code == short_code && *at >= cutoff {
                let hour = at
                    .duration_trunc(TimeDelta::hours(1))
                    .map_err(|e| AppError::internal(e.to_string(), json!({})))?;
                *buckets.entry(hour).or_insert(0i64) += 1;
            }
        }
        Ok(buckets
            .into_iter()
            .map(|(hour, clicks)| HourlyCount { hour, clicks })
            .collect())
    }
}

/// In-memory cache fake. Never fails and ignores TTLs.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn get(&self, short_code: &str) -> Option<String> {
        self.entries.lock().unwrap().get(short_code).cloned()
    }

    pub fn remove(&self, short_code: &str) {
        self.entries.lock().unwrap().remove(short_code);
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(short_code).cloned())
    }

    async fn set_url(
        &self,
        short_code: &str,
        long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(short_code.to_string(), long_url.to_string());
        Ok(())
    }

    async fn invalidate(&self, short_code: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(short_code);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// A wired application over the in-memory fakes.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    pub cache: Arc<MemoryCache>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

/// Builds a [`TestServer`] over in-memory fakes.
///
/// The click channel receiver is handed to the test rather than a worker,
/// so tests can assert which events were scheduled.
pub fn spawn_app() -> TestApp {
    let store = MemoryStore::new();
    let cache = MemoryCache::new();
    let (state, click_rx) = build_state(store.clone(), cache.clone());

    let server = TestServer::new(router(state)).unwrap();
    TestApp {
        server,
        store,
        cache,
        click_rx,
    }
}

/// Like [`spawn_app`], but drains the click channel through the real
/// background worker so clicks land in the store.
pub fn spawn_app_with_worker() -> (TestServer, Arc<MemoryStore>, Arc<MemoryCache>) {
    let store = MemoryStore::new();
    let cache = MemoryCache::new();
    let (state, click_rx) = build_state(store.clone(), cache.clone());

    let clicks: Arc<dyn ClickRepository> = Arc::new(MemoryClickRepository::new(store.clone()));
    tokio::spawn(run_click_worker(click_rx, clicks, Duration::from_secs(5)));

    let server = TestServer::new(router(state)).unwrap();
    (server, store, cache)
}

fn build_state(
    store: Arc<MemoryStore>,
    cache: Arc<MemoryCache>,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let links: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new(store.clone()));
    let clicks: Arc<dyn ClickRepository> = Arc::new(MemoryClickRepository::new(store));
    let cache: Arc<dyn CacheService> = cache;
    let (click_tx, click_rx) = mpsc::channel(64);

    let state = AppState {
        link_service: Arc::new(LinkService::new(links.clone(), cache.clone())),
        redirect_service: Arc::new(RedirectService::new(
            links.clone(),
            cache.clone(),
            click_tx.clone(),
        )),
        stats_service: Arc::new(StatsService::new(links, clicks, cache.clone())),
        cache,
        click_sender: click_tx,
        base_url: BASE_URL.to_string(),
    };
    (state, click_rx)
}
