//! Repository store implementations.
//!
//! - [`InMemoryRepositoryStore`] - Ordered vector in process memory, no durability

pub mod in_memory_repository_store;

pub use in_memory_repository_store::InMemoryRepositoryStore;
