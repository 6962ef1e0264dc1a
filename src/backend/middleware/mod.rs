//! Middleware Module
//!
//! This module contains the HTTP middleware of the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Admin authorization for the bulk-signup route
//! - **`cors`** - CORS preflight handling and response headers
//!
//! # Example
//!
//! ```rust,no_run
//! use enrollgate::backend::middleware::{cors_layer, require_admin};
//! use enrollgate::backend::auth::bulk_signup;
//! use enrollgate::backend::server::state::AppState;
//! use axum::{middleware::from_fn_with_state, routing::post, Router};
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route(
//!         "/api/auth/bulk-signup",
//!         post(bulk_signup).layer(from_fn_with_state(state.clone(), require_admin)),
//!     )
//!     .layer(cors_layer())
//!     .with_state(state);
//! # }
//! ```

pub mod auth;

pub mod cors;

pub use auth::{bearer_token, require_admin, AdminUser, AuthenticatedAdmin};
pub use cors::{cors_layer, preflight};
