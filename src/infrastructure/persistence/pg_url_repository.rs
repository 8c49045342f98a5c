//! PostgreSQL implementation of URL mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct UrlRecord {
    id: i64,
    long_url: String,
    short_url: String,
}

impl From<UrlRecord> for UrlMapping {
    fn from(r: UrlRecord) -> Self {
        UrlMapping::new(r.id, r.long_url, r.short_url)
    }
}

/// PostgreSQL repository for URL mappings.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (long_url, short_url)
            VALUES ($1, $2)
            RETURNING id, long_url, short_url
            "#,
        )
        .bind(new_mapping.long_url)
        .bind(new_mapping.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError> {
        // Duplicates can exist (see UrlService::add_url); the oldest wins.
        let row = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, long_url, short_url
            FROM urls
            WHERE long_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlRecord>(
            "SELECT id, long_url, short_url FROM urls WHERE short_url = $1",
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn list(&self) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlRecord>(
            "SELECT id, long_url, short_url FROM urls ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
