/**
 * Account Rows
 *
 * Profile, role and teacher-record operations on the platform's tables.
 * These are the rows that hang off an auth account:
 *
 * - `profiles (id, full_name, email, username)` - one per account
 * - `user_roles (user_id, role)` - one per account
 * - `teachers (profile_id)` - only for teachers
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::platform::rest::eq;
use crate::backend::platform::{PlatformClient, PlatformError};
use crate::shared::UserRole;

pub const PROFILES_TABLE: &str = "profiles";
pub const USER_ROLES_TABLE: &str = "user_roles";
pub const TEACHERS_TABLE: &str = "teachers";

/// Profile row to insert
#[derive(Debug, Serialize)]
pub struct NewProfile<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
struct NewRoleAssignment {
    user_id: Uuid,
    role: UserRole,
}

#[derive(Debug, Serialize)]
struct NewTeacherRecord {
    profile_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct ProfileEmail {
    email: String,
}

/// Which unique constraint a profile insert ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileConflict {
    /// A row with this id exists, typically created by the signup trigger
    DuplicateId,
    /// Another profile already uses this email
    DuplicateEmail,
}

/// Classify a failed profile insert
///
/// Returns `None` when the error is not a unique violation, or when the
/// violated constraint cannot be identified.
pub fn classify_profile_conflict(error: &PlatformError) -> Option<ProfileConflict> {
    if !error.is_unique_violation() {
        return None;
    }
    if error.mentions("email") {
        Some(ProfileConflict::DuplicateEmail)
    } else if error.mentions("pkey") || error.mentions("(id)") {
        Some(ProfileConflict::DuplicateId)
    } else {
        None
    }
}

/// Insert the profile row for an account
pub async fn create_profile(client: &PlatformClient, profile: &NewProfile<'_>) -> Result<(), PlatformError> {
    client.insert(PROFILES_TABLE, profile).await
}

/// Assign a role to an account
pub async fn assign_role(client: &PlatformClient, user_id: Uuid, role: UserRole) -> Result<(), PlatformError> {
    client
        .insert(USER_ROLES_TABLE, &NewRoleAssignment { user_id, role })
        .await
}

/// Insert the teacher record for a profile
pub async fn create_teacher_record(client: &PlatformClient, profile_id: Uuid) -> Result<(), PlatformError> {
    client
        .insert(TEACHERS_TABLE, &NewTeacherRecord { profile_id })
        .await
}

/// Look up the email registered for a username
///
/// # Returns
/// The email, or `None` if no profile has this username
pub async fn find_email_by_username(
    client: &PlatformClient,
    username: &str,
) -> Result<Option<String>, PlatformError> {
    let rows: Vec<ProfileEmail> = client
        .select(PROFILES_TABLE, "email", &[("username", eq(username))], Some(1))
        .await?;
    Ok(rows.into_iter().next().map(|row| row.email))
}

/// Check whether an account holds a role
pub async fn has_role(client: &PlatformClient, user_id: Uuid, role: UserRole) -> Result<bool, PlatformError> {
    let rows: Vec<serde_json::Value> = client
        .select(
            USER_ROLES_TABLE,
            "role",
            &[("user_id", eq(user_id)), ("role", eq(role))],
            Some(1),
        )
        .await?;
    Ok(!rows.is_empty())
}
