//! In-memory implementation of the repository store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{NewRepository, Repository, RepositoryFields};
use crate::domain::repositories::RepositoryStore;
use crate::error::AppError;

/// Repository store backed by a vector in process memory.
///
/// Records keep insertion order. Lookups are linear scans. Every operation
/// holds the lock for its full duration, so concurrent requests observe each
/// call as a single step. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRepositoryStore {
    repositories: RwLock<Vec<Repository>>,
}

impl InMemoryRepositoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn list(&self) -> Result<Vec<Repository>, AppError> {
        Ok(self.repositories.read().await.clone())
    }

    async fn create(&self, new_repository: NewRepository) -> Result<Repository, AppError> {
        let repository = Repository::create(new_repository);
        self.repositories.write().await.push(repository.clone());
        Ok(repository)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: RepositoryFields,
    ) -> Result<Option<Repository>, AppError> {
        let mut repositories = self.repositories.write().await;

        Ok(repositories.iter_mut().find(|r| r.id == id).map(|r| {
            r.apply(fields);
            r.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut repositories = self.repositories.write().await;

        match repositories.iter().position(|r| r.id == id) {
            Some(index) => {
                // `remove`, not `swap_remove`: the rest must keep their order.
                repositories.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn like(&self, id: Uuid) -> Result<Option<Repository>, AppError> {
        let mut repositories = self.repositories.write().await;

        Ok(repositories.iter_mut().find(|r| r.id == id).map(|r| {
            r.like();
            r.clone()
        }))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.repositories.read().await.len())
    }
}
