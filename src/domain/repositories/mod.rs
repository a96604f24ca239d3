//! Repository trait definitions for the domain layer.
//!
//! The catalog stores *repositories* (source-code projects); the data access
//! trait for them is [`RepositoryStore`].
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! See integration tests in `tests/handler_*.rs` for end-to-end usage.

pub mod repository_store;

pub use repository_store::RepositoryStore;

#[cfg(test)]
pub use repository_store::MockRepositoryStore;
