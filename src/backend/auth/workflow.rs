/**
 * Account Provisioning Workflow
 *
 * Creates an account and the rows that belong to it, one remote call at a
 * time:
 *
 * 1. auth user (pre-confirmed)
 * 2. profile row
 * 3. role assignment
 * 4. teacher record, for teachers only
 *
 * There is no transaction around these steps. A failure stops the sequence
 * and reports the id of the auth user if one was created, so that callers
 * can compensate. Profile and role rows written before the failure are left
 * in place.
 */

use uuid::Uuid;

use crate::backend::auth::accounts::{
    assign_role, classify_profile_conflict, create_profile, create_teacher_record, NewProfile,
    ProfileConflict,
};
use crate::backend::auth::messages;
use crate::backend::platform::{NewAuthUser, PlatformClient};
use crate::shared::UserRole;

/// Data needed to provision one account
#[derive(Debug, Clone, Copy)]
pub struct AccountRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
    pub role: UserRole,
}

/// How a duplicate profile id is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingProfile {
    /// Any profile insert failure aborts
    Reject,
    /// A profile with the new account's id is accepted as already created
    Accept,
}

/// A provisioning step failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionFailure {
    /// Auth user created before the failure, if any
    pub created_user: Option<Uuid>,
    /// Public message for the failed step
    pub message: String,
}

impl ProvisionFailure {
    fn before_user(message: String) -> Self {
        Self {
            created_user: None,
            message,
        }
    }

    fn after_user(user_id: Uuid, message: String) -> Self {
        Self {
            created_user: Some(user_id),
            message,
        }
    }
}

/// Run the provisioning sequence for one account
///
/// # Returns
/// The new account id, or the failure with the id of any auth user that now
/// needs compensating
pub async fn provision_account(
    client: &PlatformClient,
    account: AccountRequest<'_>,
    existing_profile: ExistingProfile,
) -> Result<Uuid, ProvisionFailure> {
    let user = client
        .admin_create_user(&NewAuthUser::confirmed(account.email, account.password, account.full_name))
        .await
        .map_err(|e| {
            tracing::error!("Failed to create auth user {}: {}", account.email, e);
            ProvisionFailure::before_user(messages::create_user_failed(&e))
        })?;
    let user_id = user.id;
    tracing::debug!("Created auth user {} for {}", user_id, account.email);

    let profile = NewProfile {
        id: user_id,
        full_name: account.full_name,
        email: account.email,
    };
    if let Err(e) = create_profile(client, &profile).await {
        match (classify_profile_conflict(&e), existing_profile) {
            (Some(ProfileConflict::DuplicateId), ExistingProfile::Accept) => {
                tracing::debug!("Profile {} already exists, continuing", user_id);
            }
            (Some(ProfileConflict::DuplicateEmail), _) => {
                tracing::warn!("Profile email already in use: {}", account.email);
                return Err(ProvisionFailure::after_user(
                    user_id,
                    messages::DUPLICATE_PROFILE_EMAIL.to_string(),
                ));
            }
            _ => {
                tracing::error!("Failed to create profile {}: {}", user_id, e);
                return Err(ProvisionFailure::after_user(user_id, messages::create_profile_failed(&e)));
            }
        }
    }

    assign_role(client, user_id, account.role).await.map_err(|e| {
        tracing::error!("Failed to assign role {} to {}: {}", account.role, user_id, e);
        ProvisionFailure::after_user(user_id, messages::assign_role_failed(&e))
    })?;

    if account.role.requires_role_record() {
        create_teacher_record(client, user_id).await.map_err(|e| {
            tracing::error!("Failed to create teacher record for {}: {}", user_id, e);
            ProvisionFailure::after_user(user_id, messages::create_role_record_failed(&e))
        })?;
    }

    Ok(user_id)
}
