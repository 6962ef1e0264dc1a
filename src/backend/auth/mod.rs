//! Authentication Module
//!
//! This module handles account registration and login on top of the
//! platform's auth API and tables.
//!
//! # Architecture
//!
//! - **`accounts`** - Profile, role and teacher-record rows
//! - **`workflow`** - The create-user → profile → role → record sequence
//! - **`rate_limit`** - Attempt log for bulk signup
//! - **`messages`** - Every user-facing message
//! - **`handlers`** - HTTP handlers for the three endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account row operations
//! ├── workflow.rs     - Provisioning sequence
//! ├── rate_limit.rs   - Bulk signup rate limiting
//! ├── messages.rs     - User-facing messages
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Flows
//!
//! 1. **Signup**: fields present → account provisioned as teacher → id returned
//! 2. **Login**: username → email lookup → password sign-in → session returned
//! 3. **Bulk signup**: admin checked → rate limited → validated → each
//!    account provisioned, failed items rolled back
//!
//! # Security
//!
//! - Passwords are hashed and sessions issued by the platform, never here
//! - Login failures share one message (no user enumeration)
//! - Table access uses the service-role key from server code only

/// Account row operations
pub mod accounts;

/// Provisioning sequence
pub mod workflow;

/// Bulk signup rate limiting
pub mod rate_limit;

/// User-facing messages
pub mod messages;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{BulkSignupRequest, BulkSignupResponse, LoginRequest, SignupRequest};
pub use handlers::{bulk_signup, login, signup};
pub use rate_limit::RateLimitPolicy;
