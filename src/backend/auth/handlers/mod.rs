//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs          - Module exports and shared helpers
//! ├── types.rs        - Request and response types
//! ├── validation.rs   - Presence checks and bulk schema validation
//! ├── signup.rs       - Teacher registration handler
//! ├── login.rs        - Username/password login handler
//! └── bulk_signup.rs  - Admin bulk registration handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - Teacher registration
//! - **`login`** - POST /api/auth/login - Username/password login
//! - **`bulk_signup`** - POST /api/auth/bulk-signup - Admin bulk registration
//!
//! # Example
//!
//! ```rust,no_run
//! use enrollgate::backend::auth::handlers::{signup, login};
//! use enrollgate::backend::server::state::AppState;
//! use axum::{routing::post, Router};
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/api/auth/signup", post(signup))
//!     .route("/api/auth/login", post(login))
//!     .with_state(state);
//! # }
//! ```

use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::platform::PlatformClient;

/// Request and response types
pub mod types;

/// Request validation
pub mod validation;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Bulk signup handler
pub mod bulk_signup;

// Re-export commonly used types
pub use types::{
    BulkSignupRequest, BulkSignupResponse, BulkSignupResult, BulkUserInput, LoginRequest,
    LoginResponse, SignupRequest, SignupResponse,
};

// Re-export handlers
pub use bulk_signup::bulk_signup;
pub use login::login;
pub use signup::signup;

/// Unwrap the configured platform client or fail with a configuration error
pub(crate) fn require_platform(
    platform: Option<Arc<PlatformClient>>,
) -> Result<Arc<PlatformClient>, BackendError> {
    platform.ok_or_else(|| {
        tracing::error!("Platform is not configured");
        BackendError::ConfigurationError
    })
}
