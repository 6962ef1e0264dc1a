/**
 * Bulk Signup Handler
 *
 * This module implements POST /api/auth/bulk-signup, which lets an
 * administrator create up to 50 accounts of one role in a single request.
 *
 * # Request Processing
 *
 * 1. `require_admin` middleware resolves the bearer token and checks the
 *    `admin` role (401 / 403)
 * 2. Rate limit: 3 attempts per 5 minutes per admin (429), failing open
 * 3. Schema validation with itemized messages (400)
 * 4. The attempt is logged
 * 5. Accounts are provisioned one at a time, in request order
 *
 * # Per-item Failures
 *
 * A failing item does not stop the batch. Its error is recorded as
 * `"<email>: <message>"` and, if its auth user was already created, one
 * compensating delete is issued. A failed delete adds a second error string
 * and leaves the auth account behind.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::backend::auth::handlers::require_platform;
use crate::backend::auth::handlers::types::{
    BulkSignupRequest, BulkSignupResponse, BulkSignupResult, BulkUserInput,
};
use crate::backend::auth::handlers::validation::bulk_request_errors;
use crate::backend::auth::messages;
use crate::backend::auth::rate_limit::{
    check_bulk_signup_rate, record_bulk_signup_attempt, RateLimitDecision, RateLimitPolicy,
};
use crate::backend::auth::workflow::{provision_account, AccountRequest, ExistingProfile};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AdminUser;
use crate::backend::platform::PlatformClient;
use crate::shared::UserRole;

/// Bulk signup handler
///
/// # Returns
///
/// `200 OK` with `{ success, successCount, errors, results }`. The status is
/// 200 even when some or all items failed; `success` is only true when every
/// item succeeded.
///
/// # Errors
///
/// * `400 Bad Request` - Body not JSON, or schema violations (`errors` lists
///   one message per violated field)
/// * `401 Unauthorized` / `403 Forbidden` - From the admin middleware
/// * `429 Too Many Requests` - Rate limit exceeded
/// * `500 Internal Server Error` - Missing configuration
pub async fn bulk_signup(
    State(platform): State<Option<Arc<PlatformClient>>>,
    State(policy): State<RateLimitPolicy>,
    AdminUser(admin): AdminUser,
    payload: Result<Json<BulkSignupRequest>, JsonRejection>,
) -> Result<Json<BulkSignupResponse>, BackendError> {
    let platform = require_platform(platform)?;

    if let RateLimitDecision::Limited { recent } =
        check_bulk_signup_rate(&platform, &policy, admin.user_id, Utc::now()).await
    {
        tracing::warn!(
            "Bulk signup rate limit hit by {} ({} recent attempts)",
            admin.user_id,
            recent
        );
        return Err(BackendError::rate_limited(messages::RATE_LIMITED));
    }

    let Json(request) = payload?;
    let errors = bulk_request_errors(&request);
    if !errors.is_empty() {
        tracing::warn!("Bulk signup rejected with {} validation errors", errors.len());
        return Err(BackendError::validation(messages::BULK_VALIDATION_FAILED, errors));
    }
    let role: UserRole = request.user_type.parse()?;

    tracing::info!(
        "Bulk signup by {} ({}): {} {} accounts",
        admin.user_id,
        admin.email.as_deref().unwrap_or("no email"),
        request.users.len(),
        role
    );
    record_bulk_signup_attempt(&platform, admin.user_id, request.users.len(), Utc::now()).await;

    let response = run_bulk_signup(&platform, &request.users, role).await;

    tracing::info!(
        "Bulk signup finished: {} created, {} errors",
        response.success_count,
        response.errors.len()
    );
    Ok(Json(response))
}

/// Provision every account in order, compensating failed items
pub async fn run_bulk_signup(
    platform: &PlatformClient,
    users: &[BulkUserInput],
    role: UserRole,
) -> BulkSignupResponse {
    let mut response = BulkSignupResponse::default();

    for user in users {
        let account = AccountRequest {
            email: user.email.trim(),
            password: &user.password,
            full_name: user.full_name.trim(),
            role,
        };

        match provision_account(platform, account, ExistingProfile::Accept).await {
            Ok(id) => {
                response.success_count += 1;
                response.results.push(BulkSignupResult {
                    email: account.email.to_string(),
                    id,
                    temp_student_name: user.temp_student_name.clone(),
                });
            }
            Err(failure) => {
                response.errors.push(format!("{}: {}", account.email, failure.message));

                if let Some(user_id) = failure.created_user {
                    match platform.admin_delete_user(user_id).await {
                        Ok(()) => tracing::info!("Rolled back auth user {} ({})", user_id, account.email),
                        Err(e) => {
                            tracing::error!(
                                "Rollback of auth user {} ({}) failed: {}",
                                user_id,
                                account.email,
                                e
                            );
                            response
                                .errors
                                .push(format!("{}: {}", account.email, messages::rollback_failed(&e)));
                        }
                    }
                }
            }
        }
    }

    response.success = response.errors.is_empty() && response.success_count > 0;
    response
}
