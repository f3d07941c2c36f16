//! Member Table Rows
//!
//! Helper functions for member table rendering.

use crate::models::{Member, Role};
use crate::roster::MemberRoster;

/// Role button offered on a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    Promote(Role),
    Demote(Role),
}

impl RoleAction {
    pub fn for_role(role: Role) -> Option<Self> {
        role.promoted()
            .map(RoleAction::Promote)
            .or_else(|| role.demoted().map(RoleAction::Demote))
    }

    pub fn title(self) -> String {
        match self {
            RoleAction::Promote(to) => format!("Promote to {}", to),
            RoleAction::Demote(to) => format!("Demote to {}", to),
        }
    }
}

/// Everything one `<tr>` shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role_label: &'static str,
    pub role_class: String,
    pub status_label: &'static str,
    pub status_class: String,
    pub action: Option<RoleAction>,
    pub removing: bool,
}

impl MemberRow {
    fn new(member: &Member, removing: bool) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            email: member.email.clone().unwrap_or_else(|| "No email".to_string()),
            avatar: member.avatar.clone(),
            role_label: member.role.label(),
            role_class: format!("role-badge {}", member.role.slug()),
            status_label: member.status.label(),
            status_class: format!("status-badge {}", member.status.slug()),
            action: RoleAction::for_role(member.role),
            removing,
        }
    }
}

/// Rows for the members matching `term`, in roster order
pub fn member_rows(roster: &MemberRoster, term: &str) -> Vec<MemberRow> {
    roster
        .search(term)
        .into_iter()
        .map(|m| MemberRow::new(m, roster.is_removing(m.id)))
        .collect()
}

/// "5 members", "1 member"
pub fn member_count_label(count: usize) -> String {
    if count == 1 {
        "1 member".to_string()
    } else {
        format!("{} members", count)
    }
}
