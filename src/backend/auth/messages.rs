/**
 * User-facing Messages
 *
 * Every message a client can see is defined here so that wording stays
 * consistent between handlers. Messages derived from platform errors never
 * include keys, tokens or raw SQL.
 */

use crate::backend::platform::PlatformError;

pub const CONFIGURATION_ERROR: &str = "Server configuration error";
pub const INVALID_BODY: &str = "Invalid request body";

pub const SIGNUP_FIELDS_REQUIRED: &str = "Email, password and full name are required";
pub const LOGIN_FIELDS_REQUIRED: &str = "Username and password are required";

/// Same text for unknown usernames and wrong passwords
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub const MISSING_TOKEN: &str = "Missing or malformed authorization header";
pub const INVALID_TOKEN: &str = "Invalid or expired session";
pub const ADMIN_REQUIRED: &str = "Only administrators can create users in bulk";
pub const RATE_LIMITED: &str =
    "Too many bulk signup attempts. Please wait a few minutes and try again";
pub const BULK_VALIDATION_FAILED: &str = "Invalid bulk signup request";

pub const DUPLICATE_PROFILE_EMAIL: &str = "This email is already in use by another profile";

/// Message for a failed account creation
pub fn create_user_failed(error: &PlatformError) -> String {
    if error.is_email_taken() {
        "This email is already registered".to_string()
    } else if error.is_weak_password() {
        "Password does not meet the security requirements".to_string()
    } else {
        format!("Failed to create user: {}", error.user_message())
    }
}

/// Message for a failed profile insert (other than a duplicate email)
pub fn create_profile_failed(error: &PlatformError) -> String {
    format!("Failed to create profile: {}", error.user_message())
}

/// Message for a failed role assignment
pub fn assign_role_failed(error: &PlatformError) -> String {
    format!("Failed to assign role: {}", error.user_message())
}

/// Message for a failed role-specific record insert
pub fn create_role_record_failed(error: &PlatformError) -> String {
    format!("Failed to create teacher record: {}", error.user_message())
}

/// Message appended when a compensating delete fails
pub fn rollback_failed(error: &PlatformError) -> String {
    format!(
        "Failed to roll back the created account, it must be removed manually: {}",
        error.user_message()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_failed_email_taken() {
        let error = PlatformError::from_body(
            422,
            r#"{"error_code":"email_exists","msg":"A user with this email address has already been registered"}"#,
        );
        assert_eq!(create_user_failed(&error), "This email is already registered");
    }

    #[test]
    fn test_create_user_failed_weak_password() {
        let error = PlatformError::from_body(422, r#"{"error_code":"weak_password","msg":"Password should be at least 6 characters"}"#);
        assert_eq!(
            create_user_failed(&error),
            "Password does not meet the security requirements"
        );
    }

    #[test]
    fn test_create_user_failed_other() {
        let error = PlatformError::from_body(500, r#"{"msg":"Database error creating new user"}"#);
        assert_eq!(
            create_user_failed(&error),
            "Failed to create user: Database error creating new user"
        );
    }
}
