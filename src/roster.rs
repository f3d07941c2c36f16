//! Member Roster
//!
//! In-memory ordered member collection behind the members table.
//! Insertion order is display order; nothing is persisted.

use std::collections::BTreeSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Member, MemberStatus, Role};
use crate::validation::{self, FormErrors};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SAMPLE_MEMBERS: &[(&str, Role, &str)] = &[
    ("Sarah Johnson", Role::Officer, "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80"),
    ("Michael Chen", Role::Member, "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80"),
    ("Emily Rodriguez", Role::Officer, "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80"),
    ("David Kim", Role::Member, "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80"),
    ("Lisa Thompson", Role::Member, "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80"),
];

/// "jane.doe" -> "Jane Doe"
pub fn display_name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    local
        .split('.')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generated initials avatar for members without a photo
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=2563eb&color=fff&size=150",
        utf8_percent_encode(name, URI_COMPONENT)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRoster {
    members: Vec<Member>,
    next_id: u32,
    /// Ids confirmed for removal, waiting for the row transition
    removing: BTreeSet<u32>,
}

impl Default for MemberRoster {
    fn default() -> Self {
        Self::sample()
    }
}

impl MemberRoster {
    /// The fixed five-member roster shown when the page provides none
    pub fn sample() -> Self {
        let members = SAMPLE_MEMBERS
            .iter()
            .zip(1u32..)
            .map(|(&(name, role, avatar), id)| Member {
                id,
                name: name.to_string(),
                email: None,
                role,
                status: MemberStatus::Active,
                avatar: avatar.to_string(),
            })
            .collect();
        Self::from_members(members)
    }

    /// Roster over `members`, or the sample roster when there are none.
    /// Missing avatars are generated from the name and repeated ids get
    /// fresh ones past the highest seeded id.
    pub fn seeded(members: Vec<Member>) -> Self {
        if members.is_empty() {
            return Self::sample();
        }
        let mut next_id = members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let mut seen = BTreeSet::new();
        let members = members
            .into_iter()
            .map(|mut m| {
                if !seen.insert(m.id) {
                    m.id = next_id;
                    seen.insert(next_id);
                    next_id += 1;
                }
                if m.avatar.is_empty() {
                    m.avatar = avatar_url(&m.name);
                }
                m
            })
            .collect();
        Self::from_members(members)
    }

    fn from_members(members: Vec<Member>) -> Self {
        let next_id = members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            members,
            next_id,
            removing: BTreeSet::new(),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn get(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn is_removing(&self, id: u32) -> bool {
        self.removing.contains(&id)
    }

    /// Invite a member by email. Nothing changes when validation fails.
    pub fn add(&mut self, email: &str, role: &str) -> Result<&Member, FormErrors> {
        let (email, role) = validation::validate_new_member(email, role)?;
        let name = display_name_from_email(&email);
        let member = Member {
            id: self.next_id,
            avatar: avatar_url(&name),
            name,
            email: Some(email),
            role,
            status: MemberStatus::Pending,
        };
        self.next_id += 1;
        self.members.push(member);
        Ok(&self.members[self.members.len() - 1])
    }

    /// Move a member one tier up. `None` if missing or already at the top.
    pub fn promote(&mut self, id: u32) -> Option<&Member> {
        self.change_role(id, Role::promoted)
    }

    /// Move a member one tier down. `None` if missing or already at the bottom.
    pub fn demote(&mut self, id: u32) -> Option<&Member> {
        self.change_role(id, Role::demoted)
    }

    fn change_role(&mut self, id: u32, step: fn(Role) -> Option<Role>) -> Option<&Member> {
        let member = self.members.iter_mut().find(|m| m.id == id)?;
        member.role = step(member.role)?;
        Some(&*member)
    }

    /// First phase of a confirmed removal: flag the row. `false` for unknown ids.
    pub fn begin_removal(&mut self, id: u32) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.removing.insert(id);
        true
    }

    /// Second phase: drop the record, returning it
    pub fn finish_removal(&mut self, id: u32) -> Option<Member> {
        self.removing.remove(&id);
        let index = self.members.iter().position(|m| m.id == id)?;
        Some(self.members.remove(index))
    }

    /// Members whose name contains `term`, ignoring case, in roster order
    pub fn search(&self, term: &str) -> Vec<&Member> {
        let needle = term.to_lowercase();
        self.members
            .iter()
            .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;
    use proptest::prelude::*;

    #[test]
    fn sample_roster() {
        let roster = MemberRoster::sample();
        assert_eq!(roster.count(), 5);
        assert_eq!(roster.members()[0].name, "Sarah Johnson");
        assert_eq!(roster.members()[4].id, 5);
    }

    #[test]
    fn names_from_email() {
        assert_eq!(display_name_from_email("jane.doe@example.com"), "Jane Doe");
        assert_eq!(display_name_from_email("mark@example.com"), "Mark");
        assert_eq!(display_name_from_email("ana.de.leon@x.io"), "Ana De Leon");
    }

    #[test]
    fn avatar_encodes_like_uri_component() {
        assert_eq!(
            avatar_url("Jane Doe"),
            "https://ui-avatars.com/api/?name=Jane%20Doe&background=2563eb&color=fff&size=150"
        );
        assert!(avatar_url("O'Neil & Co").contains("name=O'Neil%20%26%20Co&"));
    }

    #[test]
    fn add_creates_pending_member_with_next_id() {
        let mut roster = MemberRoster::sample();
        let member = roster.add("jane.doe@example.com", "Member").unwrap().clone();
        assert_eq!(member.id, 6);
        assert_eq!(member.name, "Jane Doe");
        assert_eq!(member.role, Role::Member);
        assert_eq!(member.status, MemberStatus::Pending);
        assert_eq!(member.email.as_deref(), Some("jane.doe@example.com"));

        let next = roster.add("john.roe@example.com", "officer").unwrap();
        assert!(next.id > member.id);
        assert_eq!(roster.count(), 7);
    }

    #[test]
    fn add_with_bad_email_changes_nothing() {
        let mut roster = MemberRoster::sample();
        let before = roster.clone();
        let errors = roster.add("not-an-email", "Member").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.message(Field::MemberEmail).is_some());
        assert_eq!(roster, before);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut roster = MemberRoster::sample();
        roster.finish_removal(5);
        let member = roster.add("new.one@example.com", "member").unwrap();
        assert_eq!(member.id, 6);
    }

    #[test]
    fn seeded_continues_after_highest_id() {
        let roster = MemberRoster::seeded(vec![Member {
            id: 41,
            name: "Ana Cruz".into(),
            email: None,
            role: Role::Member,
            status: MemberStatus::Active,
            avatar: String::new(),
        }]);
        assert_eq!(roster.next_id, 42);
        assert!(roster.members()[0].avatar.contains("name=Ana%20Cruz"));
        assert_eq!(MemberRoster::seeded(Vec::new()), MemberRoster::sample());
    }

    #[test]
    fn promote_and_demote_follow_the_ladder() {
        let mut roster = MemberRoster::sample();
        assert_eq!(roster.promote(2).map(|m| m.role), Some(Role::Officer));
        assert!(roster.promote(2).is_none());
        assert_eq!(roster.demote(2).map(|m| m.role), Some(Role::Member));
        assert!(roster.demote(2).is_none());
        assert!(roster.promote(99).is_none());
        assert!(roster.demote(99).is_none());
    }

    #[test]
    fn admin_is_off_the_ladder() {
        let mut roster = MemberRoster::sample();
        let id = roster.add("boss@example.com", "admin").unwrap().id;
        assert!(roster.promote(id).is_none());
        assert!(roster.demote(id).is_none());
        assert_eq!(roster.get(id).map(|m| m.role), Some(Role::Admin));
    }

    #[test]
    fn removal_is_two_phase() {
        let mut roster = MemberRoster::sample();
        assert!(roster.begin_removal(3));
        assert!(roster.is_removing(3));
        assert_eq!(roster.count(), 5);

        let removed = roster.finish_removal(3).unwrap();
        assert_eq!(removed.name, "Emily Rodriguez");
        assert_eq!(roster.count(), 4);
        assert!(roster.get(3).is_none());
        assert!(!roster.is_removing(3));
    }

    #[test]
    fn removing_unknown_id_leaves_roster_alone() {
        let mut roster = MemberRoster::sample();
        let before = roster.clone();
        assert!(!roster.begin_removal(42));
        assert!(roster.finish_removal(42).is_none());
        assert_eq!(roster, before);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let roster = MemberRoster::sample();
        let names: Vec<_> = roster.search("ICH").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Michael Chen"]);
        assert_eq!(roster.search("").len(), 5);
        assert!(roster.search("zzz").is_empty());
    }

    #[test]
    fn search_keeps_spaces_in_the_term() {
        let roster = MemberRoster::sample();
        let names: Vec<_> = roster.search("a ").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Lisa Thompson"]);
        assert_eq!(roster.search(" ").len(), 5);
        assert!(roster.search("  ").is_empty());
    }

    #[test]
    fn seeded_renumbers_repeated_ids() {
        let member = |id, name: &str| Member {
            id,
            name: name.into(),
            email: None,
            role: Role::Member,
            status: MemberStatus::Active,
            avatar: "a".into(),
        };
        let mut roster = MemberRoster::seeded(vec![member(7, "Ana Cruz"), member(7, "Ben Diaz"), member(3, "Cy Lim")]);
        let ids: Vec<u32> = roster.members().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![7, 8, 3]);
        assert_eq!(roster.get(8).map(|m| m.name.as_str()), Some("Ben Diaz"));

        assert!(roster.finish_removal(7).is_some());
        assert!(roster.get(7).is_none());
        assert_eq!(roster.add("dee.ong@example.com", "member").unwrap().id, 9);
    }

    fn arb_role() -> impl Strategy<Value = Role> {
        prop_oneof![Just(Role::Member), Just(Role::Officer), Just(Role::Admin)]
    }

    proptest! {
        #[test]
        fn search_keeps_exactly_matching_members_in_order(
            names in proptest::collection::vec("[A-Za-z ]{0,12}", 0..20),
            term in "[A-Za-z ]{0,3}",
        ) {
            let members = names
                .iter()
                .zip(1u32..)
                .map(|(name, id)| Member {
                    id,
                    name: name.clone(),
                    email: None,
                    role: Role::Member,
                    status: MemberStatus::Active,
                    avatar: "a".into(),
                })
                .collect::<Vec<_>>();
            let roster = MemberRoster::from_members(members.clone());

            let found: Vec<u32> = roster.search(&term).iter().map(|m| m.id).collect();
            let expected: Vec<u32> = members
                .iter()
                .filter(|m| m.name.to_lowercase().contains(&term.to_lowercase()))
                .map(|m| m.id)
                .collect();
            prop_assert_eq!(found, expected);
            prop_assert_eq!(roster.count(), members.len());
        }

        #[test]
        fn promote_then_demote_round_trips(role in arb_role()) {
            let mut roster = MemberRoster::from_members(vec![Member {
                id: 1,
                name: "X".into(),
                email: None,
                role,
                status: MemberStatus::Active,
                avatar: String::new(),
            }]);
            if roster.promote(1).is_some() {
                roster.demote(1);
            }
            prop_assert_eq!(roster.get(1).map(|m| m.role), Some(role));
        }
    }
}
