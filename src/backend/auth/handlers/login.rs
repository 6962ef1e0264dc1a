/**
 * Login Handler
 *
 * This module implements the username/password login handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the email for the username in `profiles` (service-role key,
 *    so the table stays hidden from anonymous clients)
 * 2. Sign in with the resolved email and the password (anonymous key)
 * 3. Return the session payload
 *
 * # Security
 *
 * - Unknown usernames, wrong passwords and lookup failures all return the
 *   same status and text, so usernames cannot be probed
 * - Passwords are never logged
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::accounts::find_email_by_username;
use crate::backend::auth::handlers::require_platform;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::handlers::validation::require_login_fields;
use crate::backend::auth::messages;
use crate::backend::error::BackendError;
use crate::backend::platform::PlatformClient;

fn invalid_credentials() -> BackendError {
    BackendError::handler(StatusCode::BAD_REQUEST, messages::INVALID_CREDENTIALS)
}

/// Login handler
///
/// # Returns
///
/// `200 OK` with `{ "success": true, "access_token": ..., "user": ..., ... }`
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, or invalid credentials (one generic
///   message for every credential failure)
/// * `500 Internal Server Error` - If configuration is missing
pub async fn login(
    State(platform): State<Option<Arc<PlatformClient>>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let platform = require_platform(platform)?;
    let Json(request) = payload?;

    if let Err(e) = require_login_fields(&request) {
        tracing::warn!("Login rejected: {}", e);
        return Err(e.into());
    }
    let username = request.username.trim();
    tracing::info!("Login request for: {}", username);

    let email = find_email_by_username(&platform, username)
        .await
        .map_err(|e| {
            tracing::error!("Username lookup failed for {}: {}", username, e);
            invalid_credentials()
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", username);
            invalid_credentials()
        })?;

    let session = platform
        .sign_in_with_password(&email, &request.password)
        .await
        .map_err(|e| {
            tracing::warn!("Sign-in failed for {}: {}", username, e);
            invalid_credentials()
        })?;

    tracing::info!("User logged in successfully: {}", username);

    Ok(Json(LoginResponse {
        success: true,
        session,
    }))
}
