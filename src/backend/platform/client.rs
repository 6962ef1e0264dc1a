/**
 * Platform Client
 *
 * `PlatformClient` owns a pooled `reqwest::Client` and the platform
 * configuration. It is cheap to share behind an `Arc` and is the only shared
 * object in the application state.
 *
 * Requests are authenticated by sending the chosen API key both as the
 * `apikey` header and as a bearer token, which is what the platform's
 * gateway expects.
 */

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::backend::platform::error::PlatformError;
use crate::shared::config::PlatformConfig;

/// Which API key a request is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// Public key; subject to row-level security
    Anon,
    /// Privileged service key; bypasses row-level security
    ServiceRole,
}

/// HTTP client for the platform's auth API and REST gateway
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    config: PlatformConfig,
}

impl PlatformClient {
    /// Create a client for the given configuration
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be built (TLS
    /// backend initialisation).
    pub fn new(config: PlatformConfig) -> Result<Self, PlatformError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    fn key(&self, credential: Credential) -> &str {
        match credential {
            Credential::Anon => self.config.anon_key(),
            Credential::ServiceRole => self.config.service_role_key(),
        }
    }

    /// Start a request authenticated with `credential`
    pub(crate) fn request(&self, method: Method, path: &str, credential: Credential) -> RequestBuilder {
        let key = self.key(credential);
        self.http
            .request(method, self.url(path))
            .header("apikey", key)
            .bearer_auth(key)
    }

    /// Start a request on behalf of an end user
    ///
    /// The anonymous key identifies the project; the user's own access token
    /// is the bearer.
    pub(crate) fn request_as_user(&self, method: Method, path: &str, access_token: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", self.key(Credential::Anon))
            .bearer_auth(access_token)
    }
}

/// Send a request and decode a JSON body
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, PlatformError> {
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(PlatformError::from_response(response).await);
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| PlatformError::UnexpectedResponse(e.to_string()))
}

/// Send a request and ignore the body on success
pub(crate) async fn send_empty(request: RequestBuilder) -> Result<(), PlatformError> {
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(PlatformError::from_response(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PlatformClient {
        let config = PlatformConfig::builder()
            .url("https://project.example.co/")
            .anon_key("anon")
            .service_role_key("service")
            .build()
            .unwrap();
        PlatformClient::new(config).unwrap()
    }

    #[test]
    fn test_service_role_headers() {
        let request = client()
            .request(Method::GET, "/rest/v1/profiles", Credential::ServiceRole)
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "https://project.example.co/rest/v1/profiles");
        assert_eq!(request.headers()["apikey"], "service");
        assert_eq!(request.headers()["authorization"], "Bearer service");
    }

    #[test]
    fn test_user_request_uses_anon_key_and_user_token() {
        let request = client()
            .request_as_user(Method::GET, "/auth/v1/user", "user-token")
            .build()
            .unwrap();

        assert_eq!(request.headers()["apikey"], "anon");
        assert_eq!(request.headers()["authorization"], "Bearer user-token");
    }
}
