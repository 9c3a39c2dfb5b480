//! Repository trait for link data access.

use crate::domain::entities::{Link, ListOrder, NewLink};
use crate::domain::error::StoreError;
use async_trait::async_trait;

/// Store of link records keyed uniquely by short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with a click count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the short code is already in use.
    /// This check is authoritative: concurrent inserts of the same code cannot
    /// both succeed.
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its short code, regardless of expiry.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Adds one to the link's click count.
    ///
    /// The increment happens inside the store, so concurrent callers on the same
    /// link never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this id.
    async fn increment_click_count(&self, id: i64) -> Result<(), StoreError>;

    /// Removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this id.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Counts all stored links, expired ones included.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Returns up to `limit` links after skipping `offset`.
    ///
    /// Links are ordered by creation time, ties broken by id, both in the
    /// direction given by `order`.
    async fn list_page(
        &self,
        offset: i64,
        limit: i64,
        order: ListOrder,
    ) -> Result<Vec<Link>, StoreError>;
}
