//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, ListOrder, NewLink};
use crate::domain::error::StoreError;
use crate::domain::repositories::LinkRepository;

const LIST_NEWEST_FIRST: &str = r#"
    SELECT id, short_code, original_url, is_alias, click_count, expires_at, created_at
    FROM links
    ORDER BY created_at DESC, id DESC
    LIMIT $1 OFFSET $2
"#;

const LIST_OLDEST_FIRST: &str = r#"
    SELECT id, short_code, original_url, is_alias, click_count, expires_at, created_at
    FROM links
    ORDER BY created_at ASC, id ASC
    LIMIT $1 OFFSET $2
"#;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    is_alias: bool,
    click_count: i64,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            short_code: row.short_code,
            original_url: row.original_url,
            is_alias: row.is_alias,
            click_count: row.click_count,
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Short code uniqueness is enforced by the `links_short_code_key` constraint,
/// and click counts are incremented in a single `UPDATE`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, original_url, is_alias, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, short_code, original_url, is_alias, click_count, expires_at, created_at
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(new_link.is_alias)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, is_alias, click_count, expires_at, created_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_click_count(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_page(
        &self,
        offset: i64,
        limit: i64,
        order: ListOrder,
    ) -> Result<Vec<Link>, StoreError> {
        let sql = match order {
            ListOrder::NewestFirst => LIST_NEWEST_FIRST,
            ListOrder::OldestFirst => LIST_OLDEST_FIRST,
        };

        let rows = sqlx::query_as::<_, LinkRow>(sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }
}
