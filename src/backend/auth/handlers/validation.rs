/**
 * Request Validation
 *
 * Presence checks for the single-account handlers, and the itemized schema
 * check for bulk signup. Bulk messages have the form `field: problem`, with
 * per-user fields prefixed by their index (`users[2].email: ...`), one
 * message per violated field.
 */

use validator::{Validate, ValidationErrors};

use crate::backend::auth::handlers::types::{BulkSignupRequest, LoginRequest, SignupRequest};
use crate::backend::auth::messages;
use crate::shared::SharedError;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Require email, password and full name
pub fn require_signup_fields(request: &SignupRequest) -> Result<(), SharedError> {
    let missing = [
        ("email", &request.email),
        ("password", &request.password),
        ("full_name", &request.full_name),
    ]
    .into_iter()
    .find(|(_, value)| is_blank(value));

    match missing {
        Some((field, _)) => Err(SharedError::validation(field, messages::SIGNUP_FIELDS_REQUIRED)),
        None => Ok(()),
    }
}

/// Require username and password
pub fn require_login_fields(request: &LoginRequest) -> Result<(), SharedError> {
    if is_blank(&request.username) {
        return Err(SharedError::validation("username", messages::LOGIN_FIELDS_REQUIRED));
    }
    if request.password.is_empty() {
        return Err(SharedError::validation("password", messages::LOGIN_FIELDS_REQUIRED));
    }
    Ok(())
}

fn display_field(field: &str) -> &str {
    match field {
        "user_type" => "userType",
        other => other,
    }
}

/// One message per violated field, sorted by field name
fn field_messages(errors: &ValidationErrors, prefix: &str) -> Vec<String> {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let first = field_errors.first()?;
            let text = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((display_field(&field.to_string()).to_string(), text))
        })
        .collect();
    fields.sort();

    fields
        .into_iter()
        .map(|(field, text)| format!("{}{}: {}", prefix, field, text))
        .collect()
}

/// Collect every violation in a bulk signup request
///
/// An empty vector means the request is valid.
pub fn bulk_request_errors(request: &BulkSignupRequest) -> Vec<String> {
    let mut messages = match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => field_messages(&errors, ""),
    };

    for (index, user) in request.users.iter().enumerate() {
        if let Err(errors) = user.validate() {
            messages.extend(field_messages(&errors, &format!("users[{}].", index)));
        }
    }

    messages
}
