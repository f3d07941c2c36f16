//! Tab Bar Component
//!
//! Switches between the profile and members sections, mirrored in the URL hash.

use leptos::prelude::*;

use crate::commands;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Profile,
    Members,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Profile, Tab::Members];

    /// Hash fragment and section id
    pub fn id(self) -> &'static str {
        match self {
            Tab::Profile => "profile",
            Tab::Members => "members",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Profile => "Organization Profile",
            Tab::Members => "Members",
        }
    }

    /// Tab named by the URL hash, the profile tab otherwise
    pub fn from_hash(hash: Option<&str>) -> Tab {
        hash.and_then(|h| Tab::ALL.into_iter().find(|t| t.id() == h.trim_start_matches('#')))
            .unwrap_or(Tab::Profile)
    }
}

#[component]
pub fn TabBar(current: RwSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || current.get() == tab;
                view! {
                    <button
                        type="button"
                        role="tab"
                        data-tab=tab.id()
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        aria-selected=move || is_active().to_string()
                        on:click=move |ev| {
                            ev.prevent_default();
                            current.set(tab);
                            commands::set_hash(tab.id());
                        }
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
