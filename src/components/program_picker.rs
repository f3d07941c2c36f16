//! Program Picker Component
//!
//! Checklist modal that replaces the chip selection on save.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::components::ModalDialog;
use crate::models::ProgramOption;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ProgramPicker(open: RwSignal<bool>, programs: Vec<ProgramOption>) -> impl IntoView {
    let store = use_page_store();
    let checked = RwSignal::new(BTreeSet::<String>::new());

    // Start from the current chips every time the picker opens
    Effect::new(move |_| {
        if open.get() {
            checked.set(store.chips().read_untracked().selected_ids());
        }
    });

    let options = if programs.is_empty() {
        view! { <p class="empty-hint">"No programs available."</p> }.into_any()
    } else {
        programs
            .iter()
            .map(|program| {
                let value = program.id.clone();
                let id_for_checked = program.id.clone();
                let id_for_change = program.id.clone();
                view! {
                    <label class="program-option">
                        <input
                            type="checkbox"
                            class="program-checkbox"
                            value=value
                            prop:checked=move || checked.with(|c| c.contains(&id_for_checked))
                            on:change=move |ev| {
                                let on = event_target_checked(&ev);
                                checked.update(|c| {
                                    if on {
                                        c.insert(id_for_change.clone());
                                    } else {
                                        c.remove(&id_for_change);
                                    }
                                });
                            }
                        />
                        <span>{program.label.clone()}</span>
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    let programs = StoredValue::new(programs);
    let save = move |_| {
        let selected: Vec<ProgramOption> = checked.with_untracked(|c| {
            programs.with_value(|all| all.iter().filter(|p| c.contains(&p.id)).cloned().collect())
        });
        web_sys::console::log_1(&format!("[PROGRAMS] Saving {} selected programs", selected.len()).into());
        store.chips().write().replace_with(selected);
        open.set(false);
    };

    view! {
        <ModalDialog id="programs-modal" title="Select Programs" open=open>
            <div class="modal-body program-checklist">{options}</div>
            <div class="modal-footer">
                <button
                    type="button"
                    id="cancel-programs"
                    class="btn btn-secondary"
                    on:click=move |_| open.set(false)
                >
                    "Cancel"
                </button>
                <button type="button" id="save-programs" class="btn btn-primary" on:click=save>
                    "Save selection"
                </button>
            </div>
        </ModalDialog>
    }
}
