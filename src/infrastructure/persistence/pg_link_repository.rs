//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Row shape shared by all link queries.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    long_url: String,
    click_count: i64,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short_code,
            row.long_url,
            row.click_count,
            row.expires_at,
            row.created_at,
        )
    }
}

const LINK_COLUMNS: &str = "id, short_code, long_url, click_count, expires_at, created_at";

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE long_url = $1 AND short_code <> '' LIMIT 1"
        ))
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert_placeholder(
        &self,
        long_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        // The empty-string placeholder is excluded from the unique index,
        // so concurrent placeholder rows never collide with each other.
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (short_code, long_url, expires_at) \
             VALUES ('', $1, $2) \
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(long_url)
        .bind(expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn set_short_code(&self, id: i64, short_code: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE links SET short_code = $1 WHERE id = $2")
            .bind(short_code)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::internal(
                "Placeholder row missing",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_code = $1"
        ))
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
