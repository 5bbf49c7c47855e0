//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// SQLite repository for short URL storage and retrieval.
///
/// Uses bound parameters throughout; the `short_code` uniqueness constraint
/// is enforced by the schema, so concurrent inserts of the same code resolve
/// atomically at the storage layer.
pub struct SqliteShortUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Row shape returned by the `short_urls` queries.
#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    long_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl {
            id: row.id,
            long_url: row.long_url,
            short_code: row.short_code,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ShortUrlRepository for SqliteShortUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (long_url, short_code, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, long_url, short_code, created_at
            "#,
        )
        .bind(&new_url.long_url)
        .bind(&new_url.short_code)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, long_url, short_code, created_at
            FROM short_urls
            WHERE short_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }
}
