//! Shared Module
//!
//! This module contains types that are used by more than one part of the
//! backend: configuration, the role enumeration and shared error types.
//! None of them depend on axum, so they can be used from tools and tests
//! without building a router.

/// Shared error types
pub mod error;

/// Platform configuration
pub mod config;

/// User roles
pub mod roles;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{PlatformConfig, PlatformConfigBuilder, ConfigError};
pub use roles::UserRole;
