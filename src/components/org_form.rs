//! Edit Organization Modal
//!
//! Organization form with inline validation, program chips and the
//! multipart submit back to the page.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::ModalSession;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::commands::{self, OrgSubmission, SubmitOutcome};
use crate::components::{FieldErrorText, ModalDialog, ProgramChips, ProgramPicker};
use crate::config::DESCRIPTION_MAX_CHARS;
use crate::context::use_app_context;
use crate::models::ProgramOption;
use crate::store::{store_add_typed_program, store_update_profile, use_page_store, PageStateStoreFields};
use crate::validation::{self, Field, FormErrors, OrgDraft};

#[component]
pub fn EditOrgModal(open: RwSignal<bool>, programs: Vec<ProgramOption>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let name = RwSignal::new(String::new());
    let adviser = RwSignal::new(String::new());
    let about = RwSignal::new(String::new());
    let is_public = RwSignal::new(false);
    let image = RwSignal::new_local(None::<File>);
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);
    let session = RwSignal::new(None::<ModalSession>);
    let picker_open = RwSignal::new(false);
    let file_input = NodeRef::<html::Input>::new();

    // Fill the form from the profile each time it opens
    Effect::new(move |_| {
        if open.get() {
            let profile = store.profile().get_untracked();
            name.set(profile.name);
            adviser.set(profile.adviser);
            about.set(profile.description);
            is_public.set(profile.is_public);
            errors.set(FormErrors::default());
        }
    });

    let reset = move || {
        errors.try_set(FormErrors::default());
        image.try_set(None);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let file = commands::selected_file(&input);
        let checked = file
            .as_ref()
            .map(|f| validation::validate_image(&commands::file_meta(f)));
        match checked {
            Some(Err(error)) => {
                errors.update(|e| e.replace(error));
                input.set_value("");
                image.set(None);
            }
            _ => {
                errors.update(|e| e.clear(Field::OrgImage));
                image.set(file);
            }
        }
    };

    let add_typed_program = move |_| {
        let Some(label) = commands::prompt("Enter program name:") else {
            return;
        };
        if !store_add_typed_program(&store, &label) {
            web_sys::console::log_1(&format!("[PROGRAMS] Ignored program {:?}", label).into());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let file = image.get_untracked();
        let meta = file.as_ref().map(commands::file_meta);
        let raw_name = name.get_untracked();
        let raw_about = about.get_untracked();
        let draft = OrgDraft {
            name: &raw_name,
            description: &raw_about,
            image: meta.as_ref(),
        };
        let valid = match validation::validate_org(draft) {
            Ok(valid) => valid,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());

        let submission = OrgSubmission {
            org_name: valid.name,
            org_adviser: adviser.get_untracked().trim().to_string(),
            org_about: valid.description,
            is_public: is_public.get_untracked(),
            allowed_programs: store.chips().read_untracked().form_values(),
        };
        let token = commands::csrf_token(ctx.csrf_fallback().as_deref());
        let opened = session.get_untracked();

        submitting.set(true);
        spawn_local(async move {
            let result = commands::submit_organization(&submission, file.as_ref(), token.as_deref()).await;
            submitting.try_set(false);

            match result {
                Ok(SubmitOutcome::Redirected(url)) => commands::navigate(&url),
                Ok(SubmitOutcome::Accepted) => {
                    let preview = match &file {
                        Some(f) => match commands::read_as_data_url(f).await {
                            Ok(url) => Some(url),
                            Err(e) => {
                                web_sys::console::warn_1(&format!("[SUBMIT] Preview failed: {}", e).into());
                                None
                            }
                        },
                        None => None,
                    };
                    store_update_profile(&store, |profile| submission.apply_to(profile, preview));
                    if opened.is_some_and(|s| ctx.modals.is_live(s)) {
                        open.try_set(false);
                        reset();
                    }
                    ctx.notify("Profile updated successfully!");
                    commands::alert("Organization updated successfully!");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SUBMIT] {}", e).into());
                    commands::alert("Network error.");
                }
            }
        });
    };

    let desc_count = move || {
        format!("{} / {}", about.with(|a| a.chars().count()), DESCRIPTION_MAX_CHARS)
    };

    view! {
        <ModalDialog
            id="edit-org-modal"
            title="Edit Organization"
            open=open
            on_dismiss=Callback::new(move |_| reset())
            session=session
        >
            <form id="edit-org-form" novalidate on:submit=on_submit>
                <div class="modal-body">
                    <div class="form-group">
                        <label for="edit-org-name">"Organization name"</label>
                        <input
                            type="text"
                            id="edit-org-name"
                            name="org_name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <FieldErrorText field=Field::OrgName errors=errors />
                    </div>

                    <div class="form-group">
                        <label for="edit-org-adviser">"Adviser"</label>
                        <input
                            type="text"
                            id="edit-org-adviser"
                            name="org_adviser"
                            prop:value=move || adviser.get()
                            on:input=move |ev| adviser.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="edit-org-description">"Description"</label>
                        <textarea
                            id="edit-org-description"
                            name="org_about"
                            rows="4"
                            prop:value=move || about.get()
                            on:input=move |ev| about.set(event_target_value(&ev))
                        ></textarea>
                        <div
                            id="desc-count"
                            class=move || {
                                if about.with(|a| a.chars().count()) > DESCRIPTION_MAX_CHARS {
                                    "char-count over"
                                } else {
                                    "char-count"
                                }
                            }
                        >
                            {desc_count}
                        </div>
                        <FieldErrorText field=Field::OrgDescription errors=errors />
                    </div>

                    <div class="form-group checkbox-group">
                        <label>
                            <input
                                type="checkbox"
                                id="edit-org-public"
                                name="is_public"
                                prop:checked=move || is_public.get()
                                on:change=move |ev| is_public.set(event_target_checked(&ev))
                            />
                            " Visible to everyone"
                        </label>
                    </div>

                    <div class="form-group">
                        <label for="edit-org-image">"Profile picture"</label>
                        <input
                            type="file"
                            id="edit-org-image"
                            name="profile_picture"
                            accept="image/png, image/jpeg"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                        <FieldErrorText field=Field::OrgImage errors=errors />
                    </div>

                    <div class="form-group">
                        <label>"Allowed programs"</label>
                        <ProgramChips />
                        <div class="chip-actions">
                            <button
                                type="button"
                                id="add-program-btn"
                                class="btn btn-secondary"
                                on:click=add_typed_program
                            >
                                "Add program"
                            </button>
                            <button
                                type="button"
                                id="choose-programs-btn"
                                class="btn btn-secondary"
                                on:click=move |_| picker_open.set(true)
                            >
                                "Choose programs"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="modal-footer">
                    <button
                        type="button"
                        id="cancel-edit-org"
                        class="btn btn-secondary"
                        on:click=move |_| {
                            open.set(false);
                            reset();
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        id="save-org-btn"
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>
        </ModalDialog>
        <ProgramPicker open=picker_open programs=programs />
    }
}
