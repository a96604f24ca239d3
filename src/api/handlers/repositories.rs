//! Handlers for the repository endpoints.
//!
//! Identifier checks happen in [`crate::api::middleware::validate_id`] before
//! any of the `{id}` handlers run.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::repository::{RepositoryItem, RepositoryRequest};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all repositories in insertion order.
///
/// # Endpoint
///
/// `GET /repositories`
pub async fn list_repositories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepositoryItem>>, AppError> {
    let repositories = state.repository_service.list_repositories().await?;

    Ok(Json(
        repositories.into_iter().map(RepositoryItem::from).collect(),
    ))
}

/// Creates a repository with `likes` set to 0.
///
/// # Endpoint
///
/// `POST /repositories`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Desafio Node.js",
///   "url": "http://github.com/example/desafio",
///   "techs": ["Node.js", "Express"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, `title` / `url` are
/// missing, or a field has the wrong type.
pub async fn create_repository_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RepositoryRequest>,
) -> Result<Json<RepositoryItem>, AppError> {
    let repository = state
        .repository_service
        .create_repository(payload.into())
        .await?;

    Ok(Json(repository.into()))
}

/// Replaces title, url and techs of a repository.
///
/// # Endpoint
///
/// `PUT /repositories/{id}`
///
/// `id` and `likes` are never changed by this endpoint.
///
/// # Errors
///
/// Returns 400 Bad Request with `{ "error": "Invalid ID." }` for a malformed id.
/// Returns 400 Bad Request with `{ "error": "Repository not found." }` for an unknown id.
/// Returns 400 Bad Request if the body is invalid.
pub async fn update_repository_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RepositoryRequest>,
) -> Result<Json<RepositoryItem>, AppError> {
    let repository = state
        .repository_service
        .update_repository(id, payload.into())
        .await?;

    Ok(Json(repository.into()))
}

/// Removes a repository.
///
/// # Endpoint
///
/// `DELETE /repositories/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request with `{ "error": "Invalid ID." }` for a malformed id.
/// Returns 400 Bad Request with `{ "error": "Repository not found." }` for an unknown id.
pub async fn delete_repository_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.repository_service.delete_repository(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Adds one like to a repository.
///
/// # Endpoint
///
/// `POST /repositories/{id}/like`
///
/// # Errors
///
/// Returns 400 Bad Request with `{ "error": "Invalid ID." }` for a malformed id.
/// Returns 400 Bad Request with an empty body for an unknown id.
pub async fn like_repository_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<RepositoryItem>, AppError> {
    let repository = state
        .repository_service
        .like_repository(id)
        .await
        .map_err(|e| match e {
            AppError::NotFound => e.into_bare(),
            other => other,
        })?;

    Ok(Json(repository.into()))
}
