/**
 * Admin Authorization Middleware
 *
 * This module protects routes that only administrators may call. It
 * extracts the bearer token from the Authorization header, resolves it to a
 * user through the platform's auth API, checks the `admin` role in
 * `user_roles`, and provides the caller to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::accounts::has_role;
use crate::backend::auth::handlers::require_platform;
use crate::backend::auth::messages;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::UserRole;

/// Administrator resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedAdmin {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized(messages::MISSING_TOKEN)
        })?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized(messages::MISSING_TOKEN)
        })
}

/// Admin middleware
///
/// This middleware:
/// 1. Fails with 500 if the platform is not configured
/// 2. Extracts the bearer token (401 if missing)
/// 3. Resolves it to a user (401 if the platform rejects it)
/// 4. Checks the `admin` role (403 if absent or if the check fails)
/// 5. Attaches the admin to request extensions
pub async fn require_admin(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let platform = require_platform(app_state.platform.clone())?;
    let token = bearer_token(request.headers())?.to_owned();

    let user = platform.get_user(&token).await.map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized(messages::INVALID_TOKEN)
    })?;

    let is_admin = has_role(&platform, user.id, UserRole::Admin)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Role check failed for {}: {}", user.id, e);
            false
        });
    if !is_admin {
        tracing::warn!("User {} is not an admin", user.id);
        return Err(BackendError::forbidden(messages::ADMIN_REQUIRED));
    }

    request.extensions_mut().insert(AuthenticatedAdmin {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the administrator set by `require_admin`
#[derive(Clone, Debug)]
pub struct AdminUser(pub AuthenticatedAdmin);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedAdmin not found in request extensions");
                BackendError::unauthorized(messages::MISSING_TOKEN)
            })?;

        Ok(AdminUser(admin))
    }
}
