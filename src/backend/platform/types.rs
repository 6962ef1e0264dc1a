/**
 * Platform Data Types
 *
 * Users and sessions as returned by the auth API. Fields this service does
 * not look at are kept in `extra` so that payloads can be handed back to
 * clients unchanged.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A user account owned by the platform's auth subsystem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformUser {
    /// Account id; also the primary key of the profile row
    pub id: Uuid,
    /// Email address (absent for phone-only accounts)
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata set at creation time
    #[serde(default)]
    pub user_metadata: Value,
    /// Any other fields returned by the platform
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Session returned by a successful password sign-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: PlatformUser,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of an admin create-user call
#[derive(Debug, Serialize)]
pub struct NewAuthUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
    /// Skip the confirmation email; accounts are created by trusted code
    pub email_confirm: bool,
    pub user_metadata: Value,
}

impl<'a> NewAuthUser<'a> {
    /// Pre-confirmed account carrying the full name in its metadata
    pub fn confirmed(email: &'a str, password: &'a str, full_name: &str) -> Self {
        Self {
            email,
            password,
            email_confirm: true,
            user_metadata: serde_json::json!({ "full_name": full_name }),
        }
    }
}
