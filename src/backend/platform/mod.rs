//! Platform Client Module
//!
//! This module wraps the HTTP APIs of the backend-as-a-service platform the
//! service is built on:
//!
//! - **Auth API** (`/auth/v1/...`) - creating, deleting and resolving user
//!   accounts, and password sign-in
//! - **REST gateway** (`/rest/v1/{table}`) - row inserts and filtered selects
//!
//! # Module Structure
//!
//! ```text
//! platform/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - PlatformClient, credentials and response handling
//! ├── auth_api.rs - Auth API operations
//! ├── rest.rs     - REST gateway operations
//! ├── types.rs    - Users and sessions returned by the platform
//! └── error.rs    - PlatformError
//! ```
//!
//! # Credentials
//!
//! Every request carries an API key. Public operations (password sign-in) use
//! the anonymous key; everything else uses the service-role key, which
//! bypasses row-level security. See [`client::Credential`].

/// Client and request plumbing
pub mod client;

/// Auth API operations
pub mod auth_api;

/// REST gateway operations
pub mod rest;

/// Platform data types
pub mod types;

/// Platform error type
pub mod error;

pub use client::{Credential, PlatformClient};
pub use error::PlatformError;
pub use types::{NewAuthUser, PlatformUser, Session};
