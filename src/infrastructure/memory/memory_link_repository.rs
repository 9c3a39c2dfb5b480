//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;

use super::MemoryStore;
use crate::domain::entities::{Link, ListOrder, NewLink};
use crate::domain::error::StoreError;
use crate::domain::repositories::LinkRepository;

/// Link store backed by a [`MemoryStore`].
///
/// Every mutation runs under the store's write lock, which makes code
/// uniqueness checks and click increments atomic.
#[derive(Debug, Clone)]
pub struct MemoryLinkRepository {
    store: MemoryStore,
}

impl MemoryLinkRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut state = self.store.write()?;

        if state.ids_by_code.contains_key(&new_link.short_code) {
            return Err(StoreError::Conflict);
        }

        let link = Link {
            id: state.next_link_id(),
            short_code: new_link.short_code,
            original_url: new_link.original_url,
            is_alias: new_link.is_alias,
            click_count: 0,
            expires_at: new_link.expires_at,
            created_at: Utc::now(),
        };

        state.ids_by_code.insert(link.short_code.clone(), link.id);
        state.links.insert(link.id, link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let state = self.store.read()?;

        Ok(state
            .ids_by_code
            .get(code)
            .and_then(|id| state.links.get(id))
            .cloned())
    }

    async fn increment_click_count(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.store.write()?;

        let link = state.links.get_mut(&id).ok_or(StoreError::NotFound)?;
        link.click_count += 1;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.store.write()?;

        let link = state.links.remove(&id).ok_or(StoreError::NotFound)?;
        state.ids_by_code.remove(&link.short_code);
        state.visits.remove(&id);

        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let state = self.store.read()?;
        Ok(state.links.len() as i64)
    }

    async fn list_page(
        &self,
        offset: i64,
        limit: i64,
        order: ListOrder,
    ) -> Result<Vec<Link>, StoreError> {
        let state = self.store.read()?;

        let mut links: Vec<&Link> = state.links.values().collect();
        links.sort_by_key(|link| (link.created_at, link.id));
        if order == ListOrder::NewestFirst {
            links.reverse();
        }

        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(links
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
