/**
 * Authentication Handler Types
 *
 * Request and response bodies for the signup, login and bulk-signup
 * handlers. Missing string fields deserialize to empty strings so that the
 * handlers, not the JSON extractor, decide how to report them.
 */

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::backend::platform::Session;
use crate::shared::UserRole;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: String,
}

/// Sign up response
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub success: bool,
    pub user_id: Uuid,
}

/// Login request
///
/// `username` is looked up in `profiles`; it is not an email.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
///
/// The session returned by the platform, flattened next to `success`.
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(flatten)]
    pub session: Session,
}

/// One account in a bulk signup request
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct BulkUserInput {
    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub full_name: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    /// Label echoed back in the results, e.g. the student a parent belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub temp_student_name: Option<String>,
}

/// Bulk signup request
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
pub struct BulkSignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "must contain between 1 and 50 users"))]
    pub users: Vec<BulkUserInput>,
    #[serde(default, rename = "userType")]
    #[validate(custom(function = "validate_user_type"))]
    pub user_type: String,
}

fn validate_user_type(value: &str) -> Result<(), ValidationError> {
    if value.parse::<UserRole>().is_ok() {
        return Ok(());
    }
    let mut error = ValidationError::new("user_type");
    error.message = Some(Cow::Borrowed("must be one of admin, teacher, parent"));
    Err(error)
}

/// Result for one successfully created account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BulkSignupResult {
    pub email: String,
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_student_name: Option<String>,
}

/// Bulk signup response
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkSignupResponse {
    /// True only with zero errors and at least one created account
    pub success: bool,
    pub success_count: usize,
    /// One entry per failed item, plus one per failed rollback
    pub errors: Vec<String>,
    /// Created accounts, in request order
    pub results: Vec<BulkSignupResult>,
}
