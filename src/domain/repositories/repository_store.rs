//! Store trait for repository records.

use crate::domain::entities::{NewRepository, Repository, RepositoryFields};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage interface for the ordered collection of repositories.
///
/// Each method is atomic with respect to the others: an implementation must
/// complete the whole read-modify-write of a single call before another call
/// can observe the collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRepositoryStore`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Returns every repository in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing storage fails.
    async fn list(&self) -> Result<Vec<Repository>, AppError>;

    /// Appends a new repository with a fresh id and zero likes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing storage fails.
    async fn create(&self, new_repository: NewRepository) -> Result<Repository, AppError>;

    /// Replaces title, url and techs of the repository with `id`.
    ///
    /// Returns the updated record, or `None` if no repository has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing storage fails.
    async fn update(
        &self,
        id: Uuid,
        fields: RepositoryFields,
    ) -> Result<Option<Repository>, AppError>;

    /// Removes the repository with `id`, keeping the order of the rest.
    ///
    /// Returns `false` if no repository has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing storage fails.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Increments the like counter of the repository with `id` by one.
    ///
    /// Returns the updated record, or `None` if no repository has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing storage fails.
    async fn like(&self, id: Uuid) -> Result<Option<Repository>, AppError>;

    /// Number of stored repositories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing storage fails.
    async fn count(&self) -> Result<usize, AppError>;
}
