//! Link statistics and click analytics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{DailyCount, HourlyCount, Link};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Trailing window for the per-day series.
const DAILY_WINDOW_DAYS: i32 = 30;

/// Trailing window for the per-hour series.
const HOURLY_WINDOW_HOURS: i32 = 24;

/// Link metadata combined with the current cache state.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub is_cached: bool,
}

/// Time-bucketed click analytics for one link.
///
/// `total_clicks` reads the denormalized counter; the series are derived
/// from the click log. Buckets with zero clicks are omitted, so the series
/// may have gaps.
#[derive(Debug, Clone)]
pub struct Analytics {
    pub total_clicks: i64,
    pub clicks_by_day: Vec<DailyCount>,
    pub clicks_by_hour: Vec<HourlyCount>,
}

/// Service answering stats and analytics queries.
pub struct StatsService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
    cache: Arc<dyn CacheService>,
}

impl StatsService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        clicks: Arc<dyn ClickRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            links,
            clicks,
            cache,
        }
    }

    /// Retrieves link metadata plus whether the code currently sits in cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn stats(&self, short_code: &str) -> Result<LinkStats, AppError> {
        let link = self.find_link(short_code).await?;

        let is_cached = matches!(self.cache.get_url(short_code).await, Ok(Some(_)));

        Ok(LinkStats { link, is_cached })
    }

    /// Retrieves time-bucketed click series for a link.
    ///
    /// Both series are re-queried on every call, so consecutive calls
    /// reflect clicks recorded in between.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn analytics(&self, short_code: &str) -> Result<Analytics, AppError> {
        let link = self.find_link(short_code).await?;

        let clicks_by_day = self
            .clicks
            .daily_counts(short_code, DAILY_WINDOW_DAYS)
            .await?;
        let clicks_by_hour = self
            .clicks
            .hourly_counts(short_code, HOURLY_WINDOW_HOURS)
            .await?;

        Ok(Analytics {
            total_clicks: link.click_count,
            clicks_by_day,
            clicks_by_hour,
        })
    }

    async fn find_link(&self, short_code: &str) -> Result<Link, AppError> {
        self.links
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": short_code }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use crate::infrastructure::cache::NullCache;
    use chrono::{NaiveDate, Utc};

    fn sample_link(code: &str, click_count: i64) -> Link {
        Link::new(
            1,
            code.to_string(),
            "https://example.com".to_string(),
            click_count,
            None,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_stats_reports_uncached_link() {
        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_code()
            .withf(|code| code == "abc")
            .times(1)
            .returning(|_| Ok(Some(sample_link("abc", 3))));

        let service = StatsService::new(
            Arc::new(links),
            Arc::new(MockClickRepository::new()),
            Arc::new(NullCache),
        );

        let stats = service.stats("abc").await.unwrap();

        assert_eq!(stats.link.click_count, 3);
        assert!(!stats.is_cached);
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = StatsService::new(
            Arc::new(links),
            Arc::new(MockClickRepository::new()),
            Arc::new(NullCache),
        );

        let result = service.stats("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_analytics_combines_counter_and_series() {
        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(sample_link("abc", 3))));

        let mut clicks = MockClickRepository::new();
        clicks
            .expect_daily_counts()
            .withf(|code, days| code == "abc" && *days == 30)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    DailyCount {
                        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                        clicks: 2,
                    },
                    DailyCount {
                        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                        clicks: 1,
                    },
                ])
            });
        clicks
            .expect_hourly_counts()
            .withf(|code, hours| code == "abc" && *hours == 24)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = StatsService::new(Arc::new(links), Arc::new(clicks), Arc::new(NullCache));

        let analytics = service.analytics("abc").await.unwrap();

        assert_eq!(analytics.total_clicks, 3);
        assert_eq!(analytics.clicks_by_day.len(), 2);
        let sum: i64 = analytics.clicks_by_day.iter().map(|b| b.clicks).sum();
        assert_eq!(sum, 3);
        assert!(analytics.clicks_by_hour.is_empty());
    }

    #[tokio::test]
    async fn test_analytics_not_found_skips_series_queries() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(1).returning(|_| Ok(None));

        let mut clicks = MockClickRepository::new();
        clicks.expect_daily_counts().times(0);
        clicks.expect_hourly_counts().times(0);

        let service = StatsService::new(Arc::new(links), Arc::new(clicks), Arc::new(NullCache));

        let result = service.analytics("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
