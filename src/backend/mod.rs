//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server that
//! provisions and authenticates accounts against a hosted
//! backend-as-a-service platform (auth API plus REST gateway).
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Signup, login and bulk signup handlers and their workflow
//! - **`platform`** - HTTP client for the platform's auth and REST APIs
//! - **`middleware`** - Admin authorization and CORS
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Account handlers
//! ├── platform/       - Platform client
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an `Option<Arc<PlatformClient>>` and the bulk signup
//! rate-limit policy. Nothing is cached between requests; rate-limit history
//! is stored in the platform.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` renders as
//! `{ "success": false, "error": "...", "errors": [...] }` with the matching
//! status code.
//!
//! # Example
//!
//! ```rust,no_run
//! use enrollgate::backend::server::create_app;
//!
//! # async fn example() -> std::io::Result<()> {
//! let app = create_app().await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Account handlers and workflow
pub mod auth;

/// Platform API client
pub mod platform;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use platform::PlatformClient;
pub use server::{create_app, AppState};
