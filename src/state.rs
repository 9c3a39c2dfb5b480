//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::infrastructure::memory::MemoryStore;

/// Link service over type-erased stores, so the backend can be chosen at runtime.
pub type DynLinkService = LinkService<dyn LinkRepository, dyn VisitRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        visit_repository: Arc<dyn VisitRepository>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository, visit_repository)),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self::new(
            Arc::new(store.link_repository()),
            Arc::new(store.visit_repository()),
        )
    }
}
