//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The store reported an error. The in-memory
///   store cannot fail, so this only happens with other store implementations.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "3 repositories"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;

    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the store by counting its records.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.repository_service.count_repositories().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} repositories")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {e}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRepositoryStore;
    use crate::error::AppError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_reports_count() {
        let mut mock_store = MockRepositoryStore::new();
        mock_store.expect_count().times(1).returning(|| Ok(2));

        let state = AppState::new(Arc::new(mock_store));

        let Json(response) = health_handler(State(state)).await.unwrap();

        assert_eq!(response.status, "healthy");
        assert_eq!(response.checks.store.message.as_deref(), Some("2 repositories"));
    }

    #[tokio::test]
    async fn test_health_degraded_on_store_error() {
        let mut mock_store = MockRepositoryStore::new();
        mock_store
            .expect_count()
            .times(1)
            .returning(|| Err(AppError::internal("Store unavailable")));

        let state = AppState::new(Arc::new(mock_store));

        let (status, Json(response)) = health_handler(State(state)).await.unwrap_err();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.status, "degraded");
        assert_eq!(response.checks.store.status, "error");
    }
}
