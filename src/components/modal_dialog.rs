//! Modal Dialog Component
//!
//! Leptos wrapper around the shared modal controller.

use leptos::html;
use leptos::prelude::*;
use leptos_modal::ModalSession;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Modal whose visibility follows `open`
///
/// Escape, a backdrop click, a click outside the content and the × button
/// all set `open` to false and then run `on_dismiss`. When `session` is
/// given it holds the token of the current opening, for liveness checks in
/// async handlers.
#[component]
pub fn ModalDialog(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    open: RwSignal<bool>,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
    #[prop(optional)] session: Option<RwSignal<Option<ModalSession>>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let modal_ref = NodeRef::<html::Div>::new();

    let dismiss = move || {
        open.set(false);
        if let Some(on_dismiss) = on_dismiss {
            on_dismiss.run(());
        }
    };

    Effect::new(move |_| {
        let is_open = open.get();
        let Some(div) = modal_ref.get() else { return };
        let element: web_sys::HtmlElement = div.unchecked_into();
        if is_open {
            let opened = ctx.modals.open(Some(&element), dismiss);
            if let Some(session) = session {
                session.set(opened);
            }
        } else {
            ctx.modals.close(Some(&element));
            if let Some(session) = session {
                session.set(None);
            }
        }
    });

    let title_id = format!("{}-title", id);
    let labelledby = title_id.clone();

    view! {
        <div
            class="modal"
            id=id
            node_ref=modal_ref
            style="display: none;"
            aria-hidden="true"
            aria-labelledby=labelledby
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3 class="modal-title" id=title_id>{title}</h3>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| dismiss()
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
