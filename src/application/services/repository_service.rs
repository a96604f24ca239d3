//! Repository catalog service.

use std::sync::Arc;

use crate::domain::entities::{NewRepository, Repository, RepositoryFields};
use crate::domain::repositories::RepositoryStore;
use crate::error::AppError;
use uuid::Uuid;

/// Service for the catalog operations: list, create, update, delete and like.
///
/// Works against any [`RepositoryStore`]. Missing records are reported as
/// [`AppError::NotFound`] so handlers do not need to inspect `Option`s.
pub struct RepositoryService<S: RepositoryStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RepositoryStore + ?Sized> RepositoryService<S> {
    /// Creates a new repository service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists every repository in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>, AppError> {
        self.store.list().await
    }

    /// Creates a repository with a fresh id and zero likes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_repository(
        &self,
        new_repository: NewRepository,
    ) -> Result<Repository, AppError> {
        let repository = self.store.create(new_repository).await?;
        tracing::info!(id = %repository.id, title = %repository.title, "Repository created");
        Ok(repository)
    }

    /// Replaces title, url and techs. `id` and `likes` are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no repository has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_repository(
        &self,
        id: Uuid,
        fields: RepositoryFields,
    ) -> Result<Repository, AppError> {
        let repository = self
            .store
            .update(id, fields)
            .await?
            .ok_or_else(AppError::not_found)?;

        tracing::debug!(%id, "Repository updated");
        Ok(repository)
    }

    /// Removes a repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no repository has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_repository(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::not_found());
        }

        tracing::info!(%id, "Repository deleted");
        Ok(())
    }

    /// Adds one like to a repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no repository has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn like_repository(&self, id: Uuid) -> Result<Repository, AppError> {
        let repository = self
            .store
            .like(id)
            .await?
            .ok_or_else(AppError::not_found)?;

        tracing::debug!(%id, likes = repository.likes, "Repository liked");
        Ok(repository)
    }

    /// Number of repositories currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_repositories(&self) -> Result<usize, AppError> {
        self.store.count().await
    }
}
