use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

pub const INVALID_ID_MESSAGE: &str = "Invalid ID.";
pub const NOT_FOUND_MESSAGE: &str = "Repository not found.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid ID.")]
    InvalidId,
    #[error("Repository not found.")]
    NotFound,
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Storage failure. The in-memory store never produces it; it is reserved
    /// for other [`RepositoryStore`](crate::domain::repositories::RepositoryStore)
    /// implementations.
    #[error("{message}")]
    Internal { message: String },
    /// Status-only response with an empty body.
    #[error("{0}")]
    Bare(StatusCode),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found() -> Self {
        Self::NotFound
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::NotFound | AppError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Bare(status) => *status,
        }
    }

    /// Drops the JSON body, keeping only the status.
    pub fn into_bare(self) -> Self {
        Self::Bare(self.status())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match self {
            AppError::InvalidId => (INVALID_ID_MESSAGE.to_string(), Value::Null),
            AppError::NotFound => (NOT_FOUND_MESSAGE.to_string(), Value::Null),
            AppError::Validation { message, details } => (message, details),
            AppError::Internal { message } => (message, Value::Null),
            AppError::Bare(_) => return status.into_response(),
        };

        let body = ErrorBody {
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            INVALID_BODY_MESSAGE,
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, Vec<u8>) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_invalid_id_body() {
        let (status, body) = body_of(AppError::InvalidId).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Invalid ID." }));
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_of(AppError::not_found()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Repository not found." }));
    }

    #[tokio::test]
    async fn test_validation_body_includes_details() {
        let (status, body) =
            body_of(AppError::bad_request("Invalid request body.", json!({"x": 1}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid request body.");
        assert_eq!(json["details"]["x"], 1);
    }

    #[tokio::test]
    async fn test_into_bare_has_empty_body() {
        let (status, body) = body_of(AppError::not_found().into_bare()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_internal_is_server_error() {
        let (status, body) = body_of(AppError::internal("Store unavailable")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Store unavailable" }));
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(AppError::InvalidId.to_string(), "Invalid ID.");
        assert_eq!(AppError::not_found().to_string(), "Repository not found.");
    }
}
