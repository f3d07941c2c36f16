//! Program Chips Component
//!
//! Removable chips for the programs selected in the organization form.

use leptos::prelude::*;

use crate::store::{store_remove_program, use_page_store, PageStateStoreFields};

#[component]
pub fn ProgramChips() -> impl IntoView {
    let store = use_page_store();
    let has_chips = move || !store.chips().read().is_empty();

    view! {
        <div id="program-chips" class="chip-list">
            <Show
                when=has_chips
                fallback=|| view! { <span class="chip-placeholder">"No programs selected yet"</span> }
            >
                <For
                    each=move || store.chips().read().chips().to_vec()
                    key=|chip| chip.key
                    children=move |chip| {
                        let key = chip.key;
                        let remove_label = format!("Remove {}", chip.label);
                        view! {
                            <span class="chip" data-id=chip.id.clone()>
                                <span class="chip-label">{chip.label.clone()}</span>
                                <button
                                    type="button"
                                    class="chip-remove"
                                    aria-label=remove_label
                                    on:click=move |_| store_remove_program(&store, key)
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </Show>
        </div>
    }
}
