//! Core domain entities.
//!
//! - [`Repository`] - A catalogued source-code project
//!
//! Creation and update input use separate structs:
//! - [`NewRepository`] - For creating new records
//! - [`RepositoryFields`] - For replacing the editable fields

pub mod repository;

pub use repository::{NewRepository, Repository, RepositoryFields};
