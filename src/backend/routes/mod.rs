//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - The account endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint handlers
//! ```
//!
//! # Routes
//!
//! - `POST /api/auth/signup` - Self-service registration (public)
//! - `POST /api/auth/login` - Username/password login (public)
//! - `POST /api/auth/bulk-signup` - Batch account creation (admin only)
//!
//! `OPTIONS` on any of them is answered by the CORS layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use enrollgate::backend::routes::create_router;
//! use enrollgate::backend::server::state::AppState;
//!
//! # fn example() {
//! let router = create_router(AppState::new(None));
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
