//! Repository trait for visit analytics.

use crate::domain::entities::Visit;
use crate::domain::error::StoreError;
use async_trait::async_trait;

/// Store of per-visit records, each attached to a link id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryVisitRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Appends a visit stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the backend can tell that the link
    /// no longer exists.
    async fn record_visit(&self, link_id: i64, ip_address: &str) -> Result<Visit, StoreError>;

    /// Increments the link's click count and appends a visit as one atomic write.
    ///
    /// Either both changes are stored or neither is, so the click count never
    /// drifts from the visit log.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the link no longer exists.
    async fn record_redirect(&self, link_id: i64, ip_address: &str) -> Result<Visit, StoreError>;

    /// Returns at most `limit` visits of a link, newest first.
    async fn recent_visits(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, StoreError>;

    /// Deletes every visit of a link and returns how many were removed.
    async fn delete_all_for_link(&self, link_id: i64) -> Result<u64, StoreError>;

    /// Counts the visit rows stored for a link.
    async fn count_for_link(&self, link_id: i64) -> Result<i64, StoreError>;
}
