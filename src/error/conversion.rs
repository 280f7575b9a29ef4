/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, mapping every error
 * variant to its transport-level status code and JSON body in one place.
 *
 * # Response Bodies
 *
 * The body key depends on the failure class, matching what API clients
 * already expect:
 *
 * - `InvalidCredentials`       -> `{"message": "..."}`
 * - `MissingToken`/`InvalidToken` -> `{"msg": "..."}`
 * - `TokenRejected`            -> status only, empty body
 * - everything else            -> `{"error": "..."}`
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response.
    ///
    /// Server-side failures are logged here so individual handlers do not
    /// have to. Client errors (4xx) are logged at debug level only.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected ({}): {}", status, self);
        }

        let body = match &self {
            ApiError::InvalidCredentials => {
                Some(serde_json::json!({ "message": self.to_string() }))
            }
            ApiError::MissingToken | ApiError::InvalidToken => {
                Some(serde_json::json!({ "msg": self.to_string() }))
            }
            // A rejected token answers with the bare status, no payload.
            ApiError::TokenRejected => None,
            _ => Some(serde_json::json!({ "error": self.to_string() })),
        };

        match body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_credentials_body() {
        let (status, body) = body_json(ApiError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({ "message": "email atau password salah" }));
    }

    #[tokio::test]
    async fn test_missing_token_body() {
        let (status, body) = body_json(ApiError::MissingToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({ "msg": "No token, authorization denied" }));
    }

    #[tokio::test]
    async fn test_invalid_token_body() {
        let (status, body) = body_json(ApiError::InvalidToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({ "msg": "Token is not valid" }));
    }

    #[tokio::test]
    async fn test_rejected_token_has_no_body() {
        let response = ApiError::TokenRejected.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_bodies() {
        let (status, body) = body_json(ApiError::UserNotFound).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "User not found" }));

        let (status, body) = body_json(ApiError::ImageNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Image not found" }));
    }

    #[tokio::test]
    async fn test_internal_error_surfaces_message() {
        let (status, body) = body_json(ApiError::internal("connection refused")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "connection refused" }));
    }
}
