/**
 * Bulk Signup Rate Limiting
 *
 * Attempts are logged in the `bulk_signup_attempts` table, one row per
 * accepted bulk request. A caller with `max_attempts` or more rows inside the
 * trailing window is rejected.
 *
 * The check fails open: if the log cannot be queried, the request proceeds
 * and a warning is logged. Recording an attempt is best-effort for the same
 * reason.
 */

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::platform::rest::{eq, gte};
use crate::backend::platform::PlatformClient;

pub const ATTEMPTS_TABLE: &str = "bulk_signup_attempts";

/// Limits applied to bulk signup callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Attempts allowed inside the window
    pub max_attempts: usize,
    /// Length of the trailing window
    pub window: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            window: Duration::minutes(5),
        }
    }
}

impl RateLimitPolicy {
    /// Oldest timestamp still inside the window
    ///
    /// `None` when the window reaches past the representable range.
    pub fn window_start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        now.checked_sub_signed(self.window)
    }

    /// Whether `recent` logged attempts exhaust the allowance
    pub fn is_exceeded(&self, recent: usize) -> bool {
        recent >= self.max_attempts
    }
}

/// Outcome of a rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// The caller may proceed
    Allowed,
    /// The caller has `recent` attempts inside the window
    Limited { recent: usize },
}

#[derive(Debug, Serialize)]
struct AttemptRow {
    admin_id: Uuid,
    attempted_at: DateTime<Utc>,
    user_count: usize,
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Count the caller's recent attempts and decide
pub async fn check_bulk_signup_rate(
    client: &PlatformClient,
    policy: &RateLimitPolicy,
    admin_id: Uuid,
    now: DateTime<Utc>,
) -> RateLimitDecision {
    let Some(window_start) = policy.window_start(now) else {
        tracing::warn!(
            "Rate limit window of {}s is out of range, allowing request for {}",
            policy.window.num_seconds(),
            admin_id
        );
        return RateLimitDecision::Allowed;
    };
    let since = timestamp(window_start);
    let filters = [("admin_id", eq(admin_id)), ("attempted_at", gte(since))];

    match client
        .select::<serde_json::Value>(ATTEMPTS_TABLE, "id", &filters, None)
        .await
    {
        Ok(rows) if policy.is_exceeded(rows.len()) => RateLimitDecision::Limited { recent: rows.len() },
        Ok(_) => RateLimitDecision::Allowed,
        Err(e) => {
            tracing::warn!("Rate limit check failed for {}, allowing request: {}", admin_id, e);
            RateLimitDecision::Allowed
        }
    }
}

/// Append one attempt to the log
pub async fn record_bulk_signup_attempt(
    client: &PlatformClient,
    admin_id: Uuid,
    user_count: usize,
    now: DateTime<Utc>,
) {
    let row = AttemptRow {
        admin_id,
        attempted_at: now,
        user_count,
    };
    if let Err(e) = client.insert(ATTEMPTS_TABLE, &row).await {
        tracing::warn!("Failed to record bulk signup attempt for {}: {}", admin_id, e);
    }
}
