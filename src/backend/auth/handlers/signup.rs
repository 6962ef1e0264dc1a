/**
 * Signup Handler
 *
 * This module implements the teacher registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Check that email, password and full name are present
 * 2. Create the auth user (pre-confirmed)
 * 3. Insert the profile row
 * 4. Assign the `teacher` role
 * 5. Insert the teacher record
 * 6. Return the new user id
 *
 * # Validation
 *
 * Presence only. Format and password strength are left to the platform,
 * whose refusal is reported as the failure message.
 *
 * # Failure Handling
 *
 * Any failing step aborts the request with 500 and the step's message.
 * Nothing is rolled back: rows created before the failure stay in place.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::require_platform;
use crate::backend::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::backend::auth::handlers::validation::require_signup_fields;
use crate::backend::auth::workflow::{provision_account, AccountRequest, ExistingProfile};
use crate::backend::error::BackendError;
use crate::backend::platform::PlatformClient;
use crate::shared::UserRole;

/// Sign up handler
///
/// # Arguments
///
/// * `State(platform)` - Platform client, `None` when not configured
/// * `payload` - Signup request containing email, password and full name
///
/// # Returns
///
/// `201 Created` with `{ "success": true, "userId": "..." }`
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not JSON or a field is missing
/// * `500 Internal Server Error` - If configuration is missing or any
///   provisioning step fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "teacher@school.example",
///   "password": "securepassword123",
///   "full_name": "Ada Lovelace"
/// }
/// ```
pub async fn signup(
    State(platform): State<Option<Arc<PlatformClient>>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), BackendError> {
    let platform = require_platform(platform)?;
    let Json(request) = payload?;

    if let Err(e) = require_signup_fields(&request) {
        tracing::warn!("Signup rejected: {}", e);
        return Err(e.into());
    }
    tracing::info!("Signup request for email: {}", request.email);

    let account = AccountRequest {
        email: request.email.trim(),
        password: &request.password,
        full_name: request.full_name.trim(),
        role: UserRole::Teacher,
    };

    let user_id = provision_account(&platform, account, ExistingProfile::Reject)
        .await
        .map_err(|failure| {
            if let Some(user_id) = failure.created_user {
                tracing::error!(
                    "Signup for {} failed after creating auth user {}; partial records remain",
                    account.email,
                    user_id
                );
            }
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, failure.message)
        })?;

    tracing::info!("Teacher account created: {} ({})", account.email, user_id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            user_id,
        }),
    ))
}
