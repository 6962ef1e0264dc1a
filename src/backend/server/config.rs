/**
 * Server Configuration
 *
 * This module loads the platform client and the tunable limits from the
 * environment.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup. A
 * platform that fails to configure is set to `None` and every endpoint
 * answers with a 500 configuration error until the server is restarted with
 * valid settings.
 */

use chrono::Duration;

use crate::backend::auth::rate_limit::RateLimitPolicy;
use crate::backend::platform::PlatformClient;
use crate::shared::config::PlatformConfig;

/// Environment variable overriding the bulk signup attempt allowance
pub const MAX_ATTEMPTS_VAR: &str = "BULK_SIGNUP_MAX_ATTEMPTS";
/// Environment variable overriding the bulk signup window (seconds)
pub const WINDOW_SECS_VAR: &str = "BULK_SIGNUP_WINDOW_SECS";
/// Longest accepted bulk signup window (one day)
pub const MAX_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Load the platform client
///
/// # Returns
///
/// - `Some(PlatformClient)` if all platform settings are present and valid
/// - `None` otherwise (the reason is logged)
pub fn load_platform() -> Option<PlatformClient> {
    let config = match PlatformConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Platform configuration error: {}", e);
            tracing::warn!("All endpoints will answer with a configuration error.");
            return None;
        }
    };

    match PlatformClient::new(config) {
        Ok(client) => {
            tracing::info!("Platform client configured for {}", client.config().base_url());
            Some(client)
        }
        Err(e) => {
            tracing::error!("Failed to create platform client: {}", e);
            None
        }
    }
}

/// Load the bulk signup rate-limit policy
///
/// Unset or unparseable values fall back to the defaults.
pub fn load_rate_limit_policy() -> RateLimitPolicy {
    rate_limit_policy_from(|key| std::env::var(key).ok())
}

fn rate_limit_policy_from<F>(lookup: F) -> RateLimitPolicy
where
    F: Fn(&str) -> Option<String>,
{
    let mut policy = RateLimitPolicy::default();

    if let Some(raw) = lookup(MAX_ATTEMPTS_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(max) if max > 0 => policy.max_attempts = max,
            _ => tracing::warn!("Ignoring invalid {}={}", MAX_ATTEMPTS_VAR, raw),
        }
    }
    if let Some(raw) = lookup(WINDOW_SECS_VAR) {
        match raw.trim().parse::<i64>() {
            Ok(secs) if (1..=MAX_WINDOW_SECS).contains(&secs) => {
                policy.window = Duration::seconds(secs)
            }
            _ => tracing::warn!("Ignoring invalid {}={}", WINDOW_SECS_VAR, raw),
        }
    }

    policy
}

/// Port to listen on (`SERVER_PORT`, default 3000)
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(3000)
}
