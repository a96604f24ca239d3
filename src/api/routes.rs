//! API route configuration.

use crate::api::handlers::{
    create_repository_handler, delete_repository_handler, like_repository_handler,
    list_repositories_handler, update_repository_handler,
};
use crate::api::middleware::validate_id;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

/// Repository catalog routes.
///
/// # Endpoints
///
/// - `GET    /repositories`           - List all repositories
/// - `POST   /repositories`           - Create a repository
/// - `PUT    /repositories/{id}`      - Replace title, url and techs
/// - `DELETE /repositories/{id}`      - Remove a repository
/// - `POST   /repositories/{id}/like` - Add one like
///
/// Every route carrying `{id}` is guarded by [`validate_id::layer`].
pub fn repository_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/repositories/{id}",
            put(update_repository_handler).delete(delete_repository_handler),
        )
        .route("/repositories/{id}/like", post(like_repository_handler))
        .route_layer(middleware::from_fn(validate_id::layer))
        .route(
            "/repositories",
            get(list_repositories_handler).post(create_repository_handler),
        )
}
