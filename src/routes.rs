//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/repositories*` - Repository catalog (see [`crate::api::routes`])
//! - `GET /health`    - Health check
//!
//! # Middleware
//!
//! - **CORS** - Any origin, method and header
//! - **Tracing** - Structured request/response logging
//! - **Identifier validation** - On every `{id}` route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Path normalization is not included because it has to wrap the router
/// from the outside; use [`app_service`] for serving.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::repository_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
        .layer(cors::layer())
}

/// Application router wrapped so that `/repositories/` routes like `/repositories`.
pub fn app_service(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state))
}
