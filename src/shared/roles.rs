/**
 * User Roles
 *
 * Roles are stored as lowercase strings in the `user_roles` table.
 * Only teachers get an additional role-specific record.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// School administrator, allowed to create users in bulk
    Admin,
    /// Teacher, gets a row in `teachers`
    Teacher,
    /// Parent or guardian
    Parent,
}

impl UserRole {
    /// All roles, in the order they are documented
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Teacher, UserRole::Parent];

    /// Name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
        }
    }

    /// Whether accounts with this role need a role-specific record
    pub fn requires_role_record(&self) -> bool {
        matches!(self, Self::Teacher)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| SharedError::invalid_role(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("teacher".parse::<UserRole>().unwrap(), UserRole::Teacher);
        assert_eq!("parent".parse::<UserRole>().unwrap(), UserRole::Parent);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Teacher".parse::<UserRole>().is_err());
        assert!("student".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_only_teachers_need_role_record() {
        assert!(UserRole::Teacher.requires_role_record());
        assert!(!UserRole::Admin.requires_role_record());
        assert!(!UserRole::Parent.requires_role_record());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&UserRole::Parent).unwrap();
        assert_eq!(json, "\"parent\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
