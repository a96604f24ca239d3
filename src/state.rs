//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::RepositoryService;
use crate::domain::repositories::RepositoryStore;
use crate::infrastructure::persistence::InMemoryRepositoryStore;

/// State shared across handlers.
///
/// Clones are cheap; every clone points at the same store.
#[derive(Clone)]
pub struct AppState {
    pub repository_service: Arc<RepositoryService<dyn RepositoryStore>>,
}

impl AppState {
    /// Builds application state over the given store.
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self {
            repository_service: Arc::new(RepositoryService::new(store)),
        }
    }

    /// Builds application state over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepositoryStore::new()))
    }
}
