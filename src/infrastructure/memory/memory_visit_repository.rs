//! In-memory implementation of visit repository.

use async_trait::async_trait;
use chrono::Utc;

use super::MemoryStore;
use crate::domain::entities::Visit;
use crate::domain::error::StoreError;
use crate::domain::repositories::VisitRepository;

/// Visit store backed by a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryVisitRepository {
    store: MemoryStore,
}

impl MemoryVisitRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VisitRepository for MemoryVisitRepository {
    async fn record_visit(&self, link_id: i64, ip_address: &str) -> Result<Visit, StoreError> {
        let mut state = self.store.write()?;

        if !state.links.contains_key(&link_id) {
            return Err(StoreError::NotFound);
        }

        let visit = Visit {
            id: state.next_visit_id(),
            link_id,
            ip_address: ip_address.to_string(),
            visited_at: Utc::now(),
        };

        state.visits.entry(link_id).or_default().push(visit.clone());

        Ok(visit)
    }

    async fn record_redirect(&self, link_id: i64, ip_address: &str) -> Result<Visit, StoreError> {
        let mut state = self.store.write()?;

        let link = state.links.get_mut(&link_id).ok_or(StoreError::NotFound)?;
        link.click_count += 1;

        let visit = Visit {
            id: state.next_visit_id(),
            link_id,
            ip_address: ip_address.to_string(),
            visited_at: Utc::now(),
        };

        state.visits.entry(link_id).or_default().push(visit.clone());

        Ok(visit)
    }

    async fn recent_visits(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, StoreError> {
        let state = self.store.read()?;
        let limit = usize::try_from(limit).unwrap_or(0);

        // Visits are appended in id order, so the tail is the newest.
        Ok(state
            .visits
            .get(&link_id)
            .map(|visits| visits.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn delete_all_for_link(&self, link_id: i64) -> Result<u64, StoreError> {
        let mut state = self.store.write()?;

        Ok(state
            .visits
            .remove(&link_id)
            .map_or(0, |visits| visits.len() as u64))
    }

    async fn count_for_link(&self, link_id: i64) -> Result<i64, StoreError> {
        let state = self.store.read()?;
        Ok(state.visits.get(&link_id).map_or(0, |visits| visits.len() as i64))
    }
}
