//! Route identifier validation middleware.

use std::collections::HashMap;

use axum::{
    extract::{Path, Request, rejection::PathRejection},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::utils::id::is_uuid;

/// Name of the route parameter carrying a repository id.
pub const ID_PARAM: &str = "id";

/// Rejects requests whose `{id}` route parameter is not a hyphenated UUID.
///
/// Runs before the handler, so a malformed id never reaches the store.
/// Routes without an `{id}` parameter pass through untouched.
///
/// # Errors
///
/// Returns `400 Bad Request` with `{ "error": "Invalid ID." }` if the
/// parameter is malformed or cannot be decoded.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::put, middleware};
/// use crate::api::middleware::validate_id;
///
/// let routes = Router::new()
///     .route("/repositories/{id}", put(update_repository_handler))
///     .route_layer(middleware::from_fn(validate_id::layer));
/// ```
pub async fn layer(
    params: Result<Path<HashMap<String, String>>, PathRejection>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Path(params) = params.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable route parameters");
        AppError::InvalidId
    })?;

    if let Some(id) = params.get(ID_PARAM)
        && !is_uuid(id)
    {
        tracing::debug!(id = %id, "Rejected malformed repository id");
        return Err(AppError::InvalidId);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::StatusCode,
        middleware,
        routing::get,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn app(hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/items/{id}",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "reached"
                    }
                }),
            )
            .route_layer(middleware::from_fn(layer))
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_valid_id_reaches_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let uri = format!("/items/{}", uuid::Uuid::new_v4());

        let (status, body) = send(app(hits.clone()), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"reached");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_id_short_circuits() {
        let hits = Arc::new(AtomicUsize::new(0));

        let (status, body) = send(app(hits.clone()), "/items/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Invalid ID." }));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_simple_uuid_form_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let uri = format!("/items/{}", uuid::Uuid::new_v4().simple());

        let (status, _) = send(app(hits.clone()), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
