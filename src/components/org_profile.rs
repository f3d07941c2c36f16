//! Organization Profile Component
//!
//! Profile header with the edit button and a collapsible details section.

use leptos::prelude::*;

use crate::roster::avatar_url;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn OrgProfileCard(#[prop(into)] on_edit: Callback<()>) -> impl IntoView {
    let store = use_page_store();
    let (details_open, set_details_open) = signal(false);

    let name = move || store.profile().read().name.clone();
    let description = move || store.profile().read().description.clone();
    let image = move || {
        let profile = store.profile().read();
        profile
            .image_url
            .clone()
            .unwrap_or_else(|| avatar_url(&profile.name))
    };
    let adviser = move || {
        let adviser = store.profile().read().adviser.clone();
        if adviser.is_empty() { "Not assigned".to_string() } else { adviser }
    };
    let visibility = move || if store.profile().read().is_public { "Public" } else { "Private" };
    let programs = move || {
        let labels: Vec<String> = store.chips().read().chips().iter().map(|c| c.label.clone()).collect();
        if labels.is_empty() { "None".to_string() } else { labels.join(", ") }
    };

    view! {
        <div class="org-header">
            <img id="org-profile-img" class="org-avatar" src=image alt=name />
            <div class="org-summary">
                <h2 id="org-name">{name}</h2>
                <p id="org-description">{description}</p>
            </div>
            <button
                type="button"
                id="edit-organization-btn"
                class="btn btn-primary"
                on:click=move |_| on_edit.run(())
            >
                "Edit Organization"
            </button>
        </div>

        <Show when=move || !details_open.get()>
            <button
                type="button"
                id="view-details-btn"
                class="btn btn-link"
                on:click=move |_| set_details_open.set(true)
            >
                "View details"
            </button>
        </Show>

        <Show when=move || details_open.get()>
            <div id="org-details-section" class="org-details">
                <dl>
                    <dt>"Name"</dt>
                    <dd id="detail-org-name">{name}</dd>
                    <dt>"Description"</dt>
                    <dd id="detail-org-description">{description}</dd>
                    <dt>"Adviser"</dt>
                    <dd id="detail-org-adviser">{adviser}</dd>
                    <dt>"Visibility"</dt>
                    <dd id="detail-org-visibility">{visibility}</dd>
                    <dt>"Allowed programs"</dt>
                    <dd id="detail-org-programs">{programs}</dd>
                </dl>
                <button
                    type="button"
                    id="hide-details-btn"
                    class="btn btn-link"
                    on:click=move |_| set_details_open.set(false)
                >
                    "Hide details"
                </button>
            </div>
        </Show>
    }
}
