/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The platform client, or `None` when configuration is missing
 * - The bulk signup rate-limit policy
 *
 * Nothing in the state is mutable: per-request data lives in the handlers
 * and the rate-limit log lives in the platform's tables.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract only the part of
 * the state they need, e.g. `State(platform): State<Option<Arc<PlatformClient>>>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::rate_limit::RateLimitPolicy;
use crate::backend::platform::PlatformClient;

/// Application state shared by every request
#[derive(Clone, Debug)]
pub struct AppState {
    /// Platform client; `None` makes every endpoint answer 500
    pub platform: Option<Arc<PlatformClient>>,
    /// Limits for bulk signup callers
    pub rate_limit: RateLimitPolicy,
}

impl AppState {
    /// State with the default rate-limit policy
    pub fn new(platform: Option<PlatformClient>) -> Self {
        Self {
            platform: platform.map(Arc::new),
            rate_limit: RateLimitPolicy::default(),
        }
    }

    /// Replace the rate-limit policy
    pub fn with_rate_limit(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit = policy;
        self
    }
}

/// Implement FromRef for the platform client
impl FromRef<AppState> for Option<Arc<PlatformClient>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.platform.clone()
    }
}

/// Implement FromRef for the rate-limit policy
impl FromRef<AppState> for RateLimitPolicy {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.rate_limit
    }
}
