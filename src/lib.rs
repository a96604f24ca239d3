//! # Repo Catalog
//!
//! A small in-memory catalog of source repositories served over HTTP with Axum.
//! Records can be created, listed, updated, deleted and liked.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Repository entity and store trait
//! - **Application Layer** ([`application`]) - Catalog operations
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/repositories` | 200, all records |
//! | POST | `/repositories` | 200, created record |
//! | PUT | `/repositories/{id}` | 200, updated record |
//! | DELETE | `/repositories/{id}` | 204 |
//! | POST | `/repositories/{id}/like` | 200, liked record |
//! | GET | `/health` | 200, health report |
//!
//! Records live in process memory and are lost on restart.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RepositoryService;
    pub use crate::domain::entities::{NewRepository, Repository, RepositoryFields};
    pub use crate::error::AppError;
    pub use crate::routes::{app_router, app_service};
    pub use crate::state::AppState;
}
