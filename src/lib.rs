//! Enrollgate - Main Library
//!
//! Enrollgate is a small HTTP service that registers and signs in users of a
//! school platform against a hosted backend-as-a-service: a managed
//! authentication API plus relational tables exposed through a REST gateway.
//!
//! # Overview
//!
//! The library provides three endpoints:
//! - Single-user signup (teacher accounts)
//! - Username/password login with enumeration-resistant errors
//! - Admin-only bulk signup with rate limiting and per-item rollback
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared across the crate
//!   - Platform configuration and its builder
//!   - The `UserRole` enumeration
//!   - Shared error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and CORS handling
//!   - Platform client (auth API + REST gateway over `reqwest`)
//!   - Signup, login and bulk-signup handlers
//!   - Backend error types and their HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use enrollgate::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::SharedError` for validation failures in shared types
//! - `backend::platform::PlatformError` for remote API failures
//! - `backend::BackendError` for everything a handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
