/**
 * Server Initialization
 *
 * This module builds the Axum application from the environment.
 *
 * # Initialization Process
 *
 * 1. Load the platform client (optional, see `config`)
 * 2. Load the rate-limit policy
 * 3. Create the application state
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_platform, load_rate_limit_policy};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// The function is designed to be resilient: missing platform settings are
/// logged and the server still starts, answering every request with a
/// configuration error.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing enrollgate server");

    let platform = load_platform();
    let app_state = AppState::new(platform).with_rate_limit(load_rate_limit_policy());
    tracing::info!(
        "Bulk signup limited to {} attempts per {} seconds",
        app_state.rate_limit.max_attempts,
        app_state.rate_limit.window.num_seconds()
    );

    let app = create_router(app_state);
    tracing::info!("Router configured");

    app
}
