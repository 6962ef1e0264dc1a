/**
 * Auth API Operations
 *
 * Admin operations (`/auth/v1/admin/...`) require the service-role key.
 * Password sign-in uses the anonymous key, exactly like a browser client
 * would, so no privilege is involved in issuing sessions.
 */

use reqwest::Method;
use uuid::Uuid;

use crate::backend::platform::client::{send_empty, send_json, Credential, PlatformClient};
use crate::backend::platform::error::PlatformError;
use crate::backend::platform::types::{NewAuthUser, PlatformUser, Session};

impl PlatformClient {
    /// Create a user account as the service identity
    pub async fn admin_create_user(&self, user: &NewAuthUser<'_>) -> Result<PlatformUser, PlatformError> {
        let request = self
            .request(Method::POST, "/auth/v1/admin/users", Credential::ServiceRole)
            .json(user);
        send_json(request).await
    }

    /// Delete a user account as the service identity
    pub async fn admin_delete_user(&self, user_id: Uuid) -> Result<(), PlatformError> {
        let path = format!("/auth/v1/admin/users/{}", user_id);
        send_empty(self.request(Method::DELETE, &path, Credential::ServiceRole)).await
    }

    /// Resolve an access token to the user it was issued for
    pub async fn get_user(&self, access_token: &str) -> Result<PlatformUser, PlatformError> {
        send_json(self.request_as_user(Method::GET, "/auth/v1/user", access_token)).await
    }

    /// Password sign-in with the anonymous key
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, PlatformError> {
        let request = self
            .request(Method::POST, "/auth/v1/token", Credential::Anon)
            .query(&[("grant_type", "password")])
            .json(&serde_json::json!({ "email": email, "password": password }));
        send_json(request).await
    }
}
