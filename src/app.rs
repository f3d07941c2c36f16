//! Organization Pages App
//!
//! Root component: tabbed profile and members sections sharing one store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{EditOrgModal, MembersPanel, OrgProfileCard, SuccessBanner, Tab, TabBar};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::store::PageState;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let state = PageState::from_config(&config);
    web_sys::console::log_1(
        &format!(
            "[APP] Loaded {} members, {} programs",
            state.roster.count(),
            config.programs.len()
        )
        .into(),
    );

    // Provide context to all children
    provide_context(Store::new(state));
    provide_context(AppContext::new(config.csrf_token.clone()));

    let current_tab = RwSignal::new(Tab::from_hash(commands::current_hash().as_deref()));
    let edit_open = RwSignal::new(false);

    // Hidden sections stay mounted so open forms keep their state
    let display = move |tab: Tab| if current_tab.get() == tab { "block" } else { "none" };

    view! {
        <div class="org-layout">
            <TabBar current=current_tab />

            <section
                id=Tab::Profile.id()
                class="tab-content profile-container"
                style:display=move || display(Tab::Profile)
            >
                <OrgProfileCard on_edit=Callback::new(move |_| edit_open.set(true)) />
            </section>

            <section
                id=Tab::Members.id()
                class="tab-content members-container"
                style:display=move || display(Tab::Members)
            >
                <MembersPanel />
            </section>

            <EditOrgModal open=edit_open programs=config.programs />
            <SuccessBanner />
        </div>
    }
}
