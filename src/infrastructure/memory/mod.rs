//! In-process store implementations.
//!
//! Both repositories share one [`MemoryStore`] so that visits can only be
//! recorded for links that exist and disappear together with their link, the
//! same way the PostgreSQL foreign key behaves. State is lost on restart.

pub mod memory_link_repository;
pub mod memory_visit_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use memory_visit_repository::MemoryVisitRepository;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Link, Visit};
use crate::domain::error::StoreError;

#[derive(Debug, Default)]
pub(crate) struct MemoryState {
    pub(crate) links: HashMap<i64, Link>,
    pub(crate) ids_by_code: HashMap<String, i64>,
    pub(crate) visits: HashMap<i64, Vec<Visit>>,
    next_link_id: i64,
    next_visit_id: i64,
}

impl MemoryState {
    pub(crate) fn next_link_id(&mut self) -> i64 {
        self.next_link_id += 1;
        self.next_link_id
    }

    pub(crate) fn next_visit_id(&mut self) -> i64 {
        self.next_visit_id += 1;
        self.next_visit_id
    }
}

/// Shared state behind the in-memory link and visit repositories.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_repository(&self) -> MemoryLinkRepository {
        MemoryLinkRepository::new(self.clone())
    }

    pub fn visit_repository(&self) -> MemoryVisitRepository {
        MemoryVisitRepository::new(self.clone())
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>, StoreError> {
        self.state.read().map_err(poisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>, StoreError> {
        self.state.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    tracing::error!("In-memory store lock poisoned");
    StoreError::Backend("in-memory store lock poisoned".to_string())
}
