//! Frontend Models
//!
//! Data structures shared by the member roster, the organization form and
//! the page config embedded by the server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Member role within an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Member,
    Officer,
    Admin,
}

impl Role {
    /// Roles offered by the add-member form, in display order
    pub const ALL: [Role; 3] = [Role::Member, Role::Officer, Role::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Officer => "Officer",
            Role::Admin => "Admin",
        }
    }

    /// Form value and CSS badge class
    pub fn slug(self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Officer => "officer",
            Role::Admin => "admin",
        }
    }

    /// Next tier up the Member/Officer ladder. Admin is not on the ladder.
    pub fn promoted(self) -> Option<Role> {
        match self {
            Role::Member => Some(Role::Officer),
            Role::Officer | Role::Admin => None,
        }
    }

    /// Next tier down the Member/Officer ladder
    pub fn demoted(self) -> Option<Role> {
        match self {
            Role::Officer => Some(Role::Member),
            Role::Member | Role::Admin => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.label().to_string()
    }
}

/// Invitation state of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Pending,
}

impl MemberStatus {
    pub fn label(self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Pending => "Pending",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Pending => "pending",
        }
    }
}

/// Organization member row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub avatar: String,
}

/// Program the organization can be opened to (checklist entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramOption {
    pub id: String,
    pub label: String,
}

/// Organization values currently shown on the profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrgProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub adviser: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, rename = "profile_picture")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_form_values_case_insensitively() {
        assert_eq!("member".parse::<Role>(), Ok(Role::Member));
        assert_eq!(" Officer ".parse::<Role>(), Ok(Role::Officer));
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!("".parse::<Role>().is_err());
        assert!("leader".parse::<Role>().is_err());
    }

    #[test]
    fn ladder_is_two_tier() {
        assert_eq!(Role::Member.promoted(), Some(Role::Officer));
        assert_eq!(Role::Officer.promoted(), None);
        assert_eq!(Role::Officer.demoted(), Some(Role::Member));
        assert_eq!(Role::Member.demoted(), None);
        assert_eq!(Role::Admin.promoted(), None);
        assert_eq!(Role::Admin.demoted(), None);
    }

    #[test]
    fn member_deserializes_with_defaults() {
        let member: Member =
            serde_json::from_str(r#"{"id": 7, "name": "Ana Cruz", "role": "officer"}"#).unwrap();
        assert_eq!(member.role, Role::Officer);
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.email, None);
        assert!(member.avatar.is_empty());
    }
}
