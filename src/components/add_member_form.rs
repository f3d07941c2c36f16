//! Add Member Modal
//!
//! Email and role form that appends a pending member to the roster.

use leptos::prelude::*;

use crate::components::{FieldErrorText, ModalDialog};
use crate::context::use_app_context;
use crate::models::Role;
use crate::store::{store_add_member, use_page_store};
use crate::validation::{Field, FormErrors};

#[component]
pub fn AddMemberModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let email = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    let reset = move || {
        email.set(String::new());
        role.set(String::new());
        errors.set(FormErrors::default());
    };

    // Every opening starts from a blank form
    Effect::new(move |_| {
        if open.get() {
            reset();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_member(&store, &email.get_untracked(), &role.get_untracked()) {
            Ok(member) => {
                web_sys::console::log_1(
                    &format!("[MEMBERS] Invited {} as {}", member.name, member.role).into(),
                );
                open.set(false);
                reset();
                ctx.notify("Member invitation sent successfully!");
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <ModalDialog
            id="add-member-modal"
            title="Add Member"
            open=open
            on_dismiss=Callback::new(move |_| reset())
        >
            <form id="add-member-form" novalidate on:submit=on_submit>
                <div class="modal-body">
                    <div class="form-group">
                        <label for="member-email">"Email address"</label>
                        <input
                            type="email"
                            id="member-email"
                            name="email"
                            placeholder="name@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldErrorText field=Field::MemberEmail errors=errors />
                    </div>
                    <div class="form-group">
                        <label for="member-role">"Role"</label>
                        <select
                            id="member-role"
                            name="role"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="">"Select a role"</option>
                            {Role::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.slug()>{r.label()}</option> })
                                .collect_view()}
                        </select>
                        <FieldErrorText field=Field::MemberRole errors=errors />
                    </div>
                </div>
                <div class="modal-footer">
                    <button
                        type="button"
                        id="cancel-add-member"
                        class="btn btn-secondary"
                        on:click=move |_| {
                            open.set(false);
                            reset();
                        }
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Send Invitation"</button>
                </div>
            </form>
        </ModalDialog>
    }
}
