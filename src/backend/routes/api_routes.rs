/**
 * API Route Handlers
 *
 * This module defines the account endpoints.
 *
 * # Routes
 *
 * - `POST /api/auth/signup` - Teacher self-registration
 * - `POST /api/auth/login` - Login by username
 * - `POST /api/auth/bulk-signup` - Batch creation (requires an admin token)
 */

use axum::{middleware::from_fn_with_state, routing::post, Router};

use crate::backend::auth::{bulk_signup, login, signup};
use crate::backend::middleware::{preflight, require_admin};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Authentication
///
/// `POST /api/auth/bulk-signup` is wrapped in `require_admin`, which needs
/// the state to reach the platform. The other routes are public, and every
/// path answers `OPTIONS` without authentication.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup).options(preflight))
        .route("/api/auth/login", post(login).options(preflight))
        // Admin-only endpoint; OPTIONS stays outside the admin check
        .route(
            "/api/auth/bulk-signup",
            post(bulk_signup)
                .route_layer(from_fn_with_state(state.clone(), require_admin))
                .options(preflight),
        )
}
