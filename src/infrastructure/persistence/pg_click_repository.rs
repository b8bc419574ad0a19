//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{DailyCount, HourlyCount};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only click log and the
/// denormalized per-link counter.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DailyCountRow {
    date: NaiveDate,
    clicks: i64,
}

#[derive(sqlx::FromRow)]
struct HourlyCountRow {
    hour: DateTime<Utc>,
    clicks: i64,
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append_click(&self, short_code: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO link_clicks (short_code) VALUES ($1)")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn increment_click_count(&self, short_code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE short_code = $1")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn daily_counts(
        &self,
        short_code: &str,
        since_days: i32,
    ) -> Result<Vec<DailyCount>, AppError> {
        let rows = sqlx::query_as::<_, DailyCountRow>(
            "SELECT DATE(clicked_at) AS date, COUNT(*) AS clicks \
             FROM link_clicks \
             WHERE short_code = $1 \
               AND clicked_at >= now() - make_interval(days => $2) \
             GROUP BY DATE(clicked_at) \
             ORDER BY date ASC",
        )
        .bind(short_code)
        .bind(since_days)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DailyCount {
                date: r.date,
                clicks: r.clicks,
            })
            .collect())
    }

    async fn hourly_counts(
        &self,
        short_code: &str,
        since_hours: i32,
    ) -> Result<Vec<HourlyCount>, AppError> {
        let rows = sqlx::query_as::<_, HourlyCountRow>(
            "SELECT date_trunc('hour', clicked_at) AS hour, COUNT(*) AS clicks \
             FROM link_clicks \
             WHERE short_code = $1 \
               AND clicked_at >= now() - make_interval(hours => $2) \
             GROUP BY date_trunc('hour', clicked_at) \
             ORDER BY hour ASC",
        )
        .bind(short_code)
        .bind(since_hours)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| HourlyCount {
                hour: r.hour,
                clicks: r.clicks,
            })
            .collect())
    }
}
