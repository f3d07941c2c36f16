//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One instance is
//! created by `App` and provided through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::chips::ChipSet;
use crate::config::PageConfig;
use crate::models::{Member, OrgProfile};
use crate::roster::MemberRoster;
use crate::validation::FormErrors;

/// Everything the organization pages mutate, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Members table contents
    pub roster: MemberRoster,
    /// Programs currently selected in the organization form
    pub chips: ChipSet,
    /// Organization values shown on the profile
    pub profile: OrgProfile,
}

impl PageState {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            roster: MemberRoster::seeded(config.members.clone()),
            chips: ChipSet::from_options(config.initial_programs()),
            profile: config.organization.clone(),
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_member(store: &PageStore, email: &str, role: &str) -> Result<Member, FormErrors> {
    store.roster().write().add(email, role).cloned()
}

pub fn store_promote_member(store: &PageStore, id: u32) -> Option<Member> {
    store.roster().write().promote(id).cloned()
}

pub fn store_demote_member(store: &PageStore, id: u32) -> Option<Member> {
    store.roster().write().demote(id).cloned()
}

/// Flag a member row as leaving; `false` if the id is unknown
pub fn store_begin_removal(store: &PageStore, id: u32) -> bool {
    store.roster().write().begin_removal(id)
}

pub fn store_finish_removal(store: &PageStore, id: u32) -> Option<Member> {
    store.roster().try_write()?.finish_removal(id)
}

pub fn store_add_typed_program(store: &PageStore, label: &str) -> bool {
    store.chips().write().add_typed(label)
}

pub fn store_remove_program(store: &PageStore, key: u32) {
    store.chips().write().remove(key);
}

pub fn store_update_profile(store: &PageStore, update: impl FnOnce(&mut OrgProfile)) {
    if let Some(mut profile) = store.profile().try_write() {
        update(&mut *profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgramOption;

    #[test]
    fn state_from_config_uses_sample_roster_when_empty() {
        let config = PageConfig {
            programs: vec![ProgramOption { id: "1".into(), label: "BSCS".into() }],
            allowed_programs: vec!["1".into()],
            ..Default::default()
        };
        let state = PageState::from_config(&config);
        assert_eq!(state.roster.count(), 5);
        assert_eq!(state.chips.form_values(), vec!["1"]);
        assert_eq!(state.profile, OrgProfile::default());
    }
}
