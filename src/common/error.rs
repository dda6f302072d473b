// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    /// Error reported by the hosted auth service, surfaced verbatim
    AuthService(String),
    /// Non-OK upstream status or network failure on a proxy route.
    /// Carries the fixed per-route message; upstream detail is only logged.
    Upstream(String),
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::AuthService(msg) => write!(f, "Auth Service Error: {}", msg),
            ApiError::Upstream(msg) => write!(f, "Upstream Error: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// JSON error response structure
///
/// Every error body carries the `{"success": false, "error": "<string>"}`
/// shape the dashboard client expects, regardless of status code.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::AuthService(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let error_response = ErrorResponse {
            success: false,
            error: error_message,
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_renders_400_with_error_body() {
        let (status, body) =
            render(ApiError::BadRequest("Generation ID required".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Generation ID required"})
        );
    }

    #[tokio::test]
    async fn upstream_failure_renders_500_with_fixed_message() {
        let (status, body) =
            render(ApiError::Upstream("Failed to generate content".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Failed to generate content"})
        );
    }

    #[tokio::test]
    async fn auth_service_error_renders_401_verbatim() {
        let (status, body) =
            render(ApiError::AuthService("Invalid login credentials".to_string())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(body["error"], "Invalid login credentials");
    }

    #[tokio::test]
    async fn internal_error_keeps_the_error_body_shape() {
        let (status, body) =
            render(ApiError::InternalServer("state poisoned".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.as_object().map(|o| o.len()), Some(2));
        assert_eq!(body["success"], serde_json::json!(false));
    }
}
