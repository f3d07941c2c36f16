//! Remove Member Confirmation

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ModalDialog;
use crate::config::REMOVAL_DELAY_MS;
use crate::context::use_app_context;
use crate::store::{store_begin_removal, store_finish_removal, use_page_store};

/// Confirm dialog for the member held in `target` as `(id, name)`
///
/// Confirming fades the row out and drops the member after a short delay.
#[component]
pub fn RemoveMemberDialog(open: RwSignal<bool>, target: RwSignal<Option<(u32, String)>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let cancel = move || {
        open.set(false);
        target.set(None);
    };

    let confirm = move |_| {
        let Some((id, _)) = target.get_untracked() else {
            return;
        };
        cancel();
        if !store_begin_removal(&store, id) {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(REMOVAL_DELAY_MS).await;
            if let Some(member) = store_finish_removal(&store, id) {
                web_sys::console::log_1(&format!("[MEMBERS] Removed {}", member.name).into());
                ctx.notify(format!("{} has been removed from the organization.", member.name));
            }
        });
    };

    view! {
        <ModalDialog
            id="remove-member-modal"
            title="Remove Member"
            open=open
            on_dismiss=Callback::new(move |_| target.set(None))
        >
            <div class="modal-body">
                <p>
                    "Are you sure you want to remove "
                    <strong id="remove-member-name">
                        {move || target.get().map(|(_, name)| name).unwrap_or_default()}
                    </strong>
                    " from the organization?"
                </p>
            </div>
            <div class="modal-footer">
                <button
                    type="button"
                    id="cancel-remove-btn"
                    class="btn btn-secondary"
                    on:click=move |_| cancel()
                >
                    "Cancel"
                </button>
                <button type="button" id="confirm-remove-btn" class="btn btn-danger" on:click=confirm>
                    "Remove"
                </button>
            </div>
        </ModalDialog>
    }
}
