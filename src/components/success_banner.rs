//! Success Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Transient confirmation shown after a successful action
#[component]
pub fn SuccessBanner() -> impl IntoView {
    let ctx = use_app_context();
    let visible = move || ctx.banner.with(Option::is_some);

    view! {
        <div
            id="success-message"
            class=move || if visible() { "success-message show" } else { "success-message" }
            role="status"
            aria-live="polite"
        >
            <span id="success-text">{move || ctx.banner.get().unwrap_or_default()}</span>
        </div>
    }
}
