/**
 * Platform Errors
 *
 * The auth API and the REST gateway report failures with different JSON
 * shapes:
 *
 * - auth API: `{"code": 422, "error_code": "email_exists", "msg": "..."}`
 *   or `{"error": "invalid_grant", "error_description": "..."}`
 * - REST gateway: `{"code": "23505", "message": "...", "details": "..."}`
 *
 * Both are folded into `PlatformError::Api`.
 */

use serde::Deserialize;
use thiserror::Error;

/// Postgres error code for unique constraint violations
pub const UNIQUE_VIOLATION: &str = "23505";

/// Errors returned by the platform client
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The request could not be sent or the response could not be read
    #[error("Platform request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with a non-success status
    #[error("Platform API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Machine-readable code (`email_exists`, `23505`, ...)
        code: Option<String>,
        /// Human-readable message
        message: String,
        /// Extra detail, e.g. the conflicting key
        details: Option<String>,
    },

    /// The platform answered with a body we could not interpret
    #[error("Unexpected platform response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    code: Option<serde_json::Value>,
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
    details: Option<String>,
}

impl PlatformError {
    /// Build an API error from a non-success HTTP response
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return Self::Transport(e),
        };
        Self::from_body(status.as_u16(), &text)
    }

    /// Build an API error from a status and raw body
    pub fn from_body(status: u16, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

        let code = parsed.error_code.or_else(|| match parsed.code {
            Some(serde_json::Value::String(code)) => Some(code),
            _ => None,
        });

        let message = parsed
            .msg
            .or(parsed.message)
            .or(parsed.error_description)
            .or(parsed.error)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    reqwest::StatusCode::from_u16(status)
                        .ok()
                        .and_then(|s| s.canonical_reason())
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    body.trim().to_string()
                }
            });

        Self::Api {
            status,
            code,
            message,
            details: parsed.details,
        }
    }

    /// HTTP status, if the platform answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::UnexpectedResponse(_) => None,
        }
    }

    /// Machine-readable error code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Message without the status prefix
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether this is a unique constraint violation from the REST gateway
    pub fn is_unique_violation(&self) -> bool {
        self.code() == Some(UNIQUE_VIOLATION)
    }

    /// Whether the message or details mention `needle` (case-insensitive)
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_ascii_lowercase();
        match self {
            Self::Api { message, details, .. } => {
                message.to_ascii_lowercase().contains(&needle)
                    || details
                        .as_deref()
                        .is_some_and(|d| d.to_ascii_lowercase().contains(&needle))
            }
            _ => false,
        }
    }

    /// Whether the auth API refused to create an account because the email
    /// is already registered
    pub fn is_email_taken(&self) -> bool {
        matches!(self.code(), Some("email_exists") | Some("user_already_exists"))
            || self.mentions("already been registered")
            || self.mentions("already registered")
    }

    /// Whether the auth API rejected the password
    pub fn is_weak_password(&self) -> bool {
        self.code() == Some("weak_password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_unique_violation() {
        let body = r#"{"code":"23505","details":"Key (id)=(abc) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"profiles_pkey\""}"#;
        let error = PlatformError::from_body(409, body);

        assert_eq!(error.status(), Some(409));
        assert!(error.is_unique_violation());
        assert!(error.mentions("profiles_pkey"));
        assert!(error.mentions("key (id)"));
        assert!(!error.mentions("email"));
    }

    #[test]
    fn test_auth_email_exists() {
        let body = r#"{"code":422,"error_code":"email_exists","msg":"A user with this email address has already been registered"}"#;
        let error = PlatformError::from_body(422, body);

        assert_eq!(error.code(), Some("email_exists"));
        assert!(error.is_email_taken());
        assert!(!error.is_unique_violation());
        assert_eq!(
            error.user_message(),
            "A user with this email address has already been registered"
        );
    }

    #[test]
    fn test_oauth_style_error() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let error = PlatformError::from_body(400, body);
        assert_eq!(error.user_message(), "Invalid login credentials");
        assert_eq!(error.code(), None);
    }

    #[test]
    fn test_non_json_body() {
        let error = PlatformError::from_body(502, "upstream timed out");
        assert_eq!(error.user_message(), "upstream timed out");

        let error = PlatformError::from_body(503, "");
        assert_eq!(error.user_message(), "Service Unavailable");
    }
}
