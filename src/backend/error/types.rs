/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and
 * middleware. Every variant maps to one HTTP status and one public message.
 *
 * # Error Categories
 *
 * - Configuration errors (platform settings missing) - 500
 * - Validation errors, optionally itemized per field - 400
 * - Authorization errors - 401 / 403
 * - Rate-limit errors - 429
 *
 * Platform failures never reach this type directly: handlers turn them into
 * a message for the failing step first.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::messages;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use enrollgate::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::validation("Invalid bulk signup request", vec!["users: required".into()]);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error with an explicit status chosen by the handler
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Platform settings are missing or invalid
    #[error("Configuration error")]
    ConfigurationError,

    /// Request body failed validation
    #[error("Validation error: {message}")]
    ValidationError {
        /// Summary message
        message: String,
        /// One entry per violated field; may be empty
        errors: Vec<String>,
    },

    /// Missing or unusable credentials
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated but not allowed
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Too many recent attempts
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new validation error with itemized messages
    pub fn validation(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            errors,
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new rate-limit error
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ConfigurationError` - 500 Internal Server Error
    /// - `ValidationError` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `RateLimited` - 429 Too Many Requests
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ConfigurationError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the public error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::ConfigurationError => messages::CONFIGURATION_ERROR.to_string(),
            Self::ValidationError { message, .. } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Forbidden { message } => message.clone(),
            Self::RateLimited { message } => message.clone(),
            Self::SharedError(err) => err.public_message(),
        }
    }

    /// Itemized messages, if this error carries any
    pub fn errors(&self) -> Option<&[String]> {
        match self {
            Self::ValidationError { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}
