/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "error": "Error message",
 *   "errors": ["users[0].email: must be a valid email address"]
 * }
 * ```
 *
 * `errors` is only present for itemized validation failures.
 */

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::backend::auth::messages;
use crate::backend::error::types::BackendError;

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            success: false,
            error: self.message(),
            errors: self.errors(),
        };
        (status, Json(body)).into_response()
    }
}

/// Body that is not JSON, or not the expected shape, is a plain 400
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::handler(StatusCode::BAD_REQUEST, messages::INVALID_BODY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_plain_error_body() {
        let response = BackendError::forbidden("Admins only").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"success": false, "error": "Admins only"}));
    }

    #[tokio::test]
    async fn test_itemized_error_body() {
        let response = BackendError::validation(
            "Invalid bulk signup request",
            vec!["users: must contain between 1 and 50 users".to_string()],
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["errors"].as_array().map(|a| a.len()), Some(1));
        assert_eq!(body["success"], false);
    }
}
