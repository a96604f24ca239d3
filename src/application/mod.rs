//! Application layer services implementing the catalog operations.
//!
//! Services consume repository store traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::repository_service::RepositoryService`] - Create, list, update, delete and like

pub mod services;
