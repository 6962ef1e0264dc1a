//! Shared Error Types
//!
//! This module defines error types that are raised outside of the HTTP layer,
//! typically while checking request data before any remote call is made.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field is missing or malformed
//! - `InvalidRole` - A role name is not one of `admin`, `teacher`, `parent`
//!
//! # Usage
//!
//! ```rust
//! use enrollgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Email is required");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Unknown role name
    #[error("Invalid role '{value}': expected admin, teacher or parent")]
    InvalidRole {
        /// The rejected value
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid role error
    pub fn invalid_role(value: impl Into<String>) -> Self {
        Self::InvalidRole {
            value: value.into(),
        }
    }

    /// Message suitable for an API response
    pub fn public_message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::InvalidRole { .. } => self.to_string(),
        }
    }
}
