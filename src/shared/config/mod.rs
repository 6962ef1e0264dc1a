//! Application configuration module
//!
//! Provides the platform connection settings. Values normally come from the
//! environment (after `.env` has been loaded), but the builder can be used
//! directly, which is what the tests do.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the platform base URL
pub const PLATFORM_URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the anonymous API key
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
/// Environment variable holding the privileged service-role key
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
/// Environment variable overriding the HTTP timeout (seconds)
pub const TIMEOUT_VAR: &str = "PLATFORM_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the backend platform
#[derive(Clone)]
pub struct PlatformConfig {
    base_url: String,
    anon_key: String,
    service_role_key: String,
    timeout: Duration,
}

impl PlatformConfig {
    /// Create a new PlatformConfigBuilder
    pub fn builder() -> PlatformConfigBuilder {
        PlatformConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(url) = get(PLATFORM_URL_VAR) {
            builder = builder.url(url);
        }
        if let Some(key) = get(ANON_KEY_VAR) {
            builder = builder.anon_key(key);
        }
        if let Some(key) = get(SERVICE_ROLE_KEY_VAR) {
            builder = builder.service_role_key(key);
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Anonymous (public) API key
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Service-role API key; bypasses row-level security
    pub fn service_role_key(&self) -> &str {
        &self.service_role_key
    }

    /// Per-request HTTP timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Keys are secrets and must never reach the logs.
impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("base_url", &self.base_url)
            .field("anon_key", &"<redacted>")
            .field("service_role_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for PlatformConfig
#[derive(Debug, Default)]
pub struct PlatformConfigBuilder {
    url: Option<String>,
    anon_key: Option<String>,
    service_role_key: Option<String>,
    timeout: Option<Duration>,
}

impl PlatformConfigBuilder {
    /// Set the platform base URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the anonymous API key
    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Set the service-role API key
    pub fn service_role_key(mut self, key: impl Into<String>) -> Self {
        self.service_role_key = Some(key.into());
        self
    }

    /// Set the HTTP timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration
    ///
    /// All three platform values are required. The URL must be an absolute
    /// http(s) URL.
    pub fn build(self) -> Result<PlatformConfig, ConfigError> {
        let url = self.url.ok_or(ConfigError::MissingValue(PLATFORM_URL_VAR))?;
        let anon_key = self.anon_key.ok_or(ConfigError::MissingValue(ANON_KEY_VAR))?;
        let service_role_key = self
            .service_role_key
            .ok_or(ConfigError::MissingValue(SERVICE_ROLE_KEY_VAR))?;

        let parsed = reqwest::Url::parse(url.trim()).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(url));
        }

        Ok(PlatformConfig {
            base_url: url.trim().trim_end_matches('/').to_string(),
            anon_key,
            service_role_key,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_complete() {
        let config = PlatformConfig::from_lookup(lookup(&[
            (PLATFORM_URL_VAR, "https://project.example.co/"),
            (ANON_KEY_VAR, "anon"),
            (SERVICE_ROLE_KEY_VAR, "service"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "https://project.example.co");
        assert_eq!(config.anon_key(), "anon");
        assert_eq!(config.service_role_key(), "service");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_missing_service_role_key() {
        let result = PlatformConfig::from_lookup(lookup(&[
            (PLATFORM_URL_VAR, "https://project.example.co"),
            (ANON_KEY_VAR, "anon"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingValue(SERVICE_ROLE_KEY_VAR));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let result = PlatformConfig::from_lookup(lookup(&[
            (PLATFORM_URL_VAR, "   "),
            (ANON_KEY_VAR, "anon"),
            (SERVICE_ROLE_KEY_VAR, "service"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingValue(PLATFORM_URL_VAR));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = PlatformConfig::builder()
            .url("ftp://project.example.co")
            .anon_key("anon")
            .service_role_key("service")
            .build();
        assert_matches!(result, Err(ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = PlatformConfig::from_lookup(lookup(&[
            (PLATFORM_URL_VAR, "https://project.example.co"),
            (ANON_KEY_VAR, "anon"),
            (SERVICE_ROLE_KEY_VAR, "service"),
            (TIMEOUT_VAR, "soon"),
        ]));
        assert_matches!(result, Err(ConfigError::InvalidValue { key: TIMEOUT_VAR, .. }));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = PlatformConfig::builder()
            .url("https://project.example.co")
            .anon_key("anon-secret")
            .service_role_key("service-secret")
            .build()
            .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("anon-secret"));
        assert!(!debug.contains("service-secret"));
    }
}
