//! PostgreSQL implementation of visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::error::StoreError;
use crate::domain::repositories::VisitRepository;

#[derive(sqlx::FromRow)]
struct VisitRow {
    id: i64,
    link_id: i64,
    ip_address: String,
    visited_at: DateTime<Utc>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit {
            id: row.id,
            link_id: row.link_id,
            ip_address: row.ip_address,
            visited_at: row.visited_at,
        }
    }
}

/// PostgreSQL repository for visit rows.
///
/// Inserting a visit for a link that no longer exists trips the foreign key and
/// is reported as [`StoreError::NotFound`].
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record_visit(&self, link_id: i64, ip_address: &str) -> Result<Visit, StoreError> {
        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            INSERT INTO visits (link_id, ip_address)
            VALUES ($1, $2)
            RETURNING id, link_id, ip_address, visited_at
            "#,
        )
        .bind(link_id)
        .bind(ip_address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn record_redirect(&self, link_id: i64, ip_address: &str) -> Result<Visit, StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE id = $1")
            .bind(link_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound);
        }

        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            INSERT INTO visits (link_id, ip_address)
            VALUES ($1, $2)
            RETURNING id, link_id, ip_address, visited_at
            "#,
        )
        .bind(link_id)
        .bind(ip_address)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn recent_visits(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, StoreError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, ip_address, visited_at
            FROM visits
            WHERE link_id = $1
            ORDER BY visited_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn delete_all_for_link(&self, link_id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM visits WHERE link_id = $1")
            .bind(link_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count_for_link(&self, link_id: i64) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits WHERE link_id = $1")
            .bind(link_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
