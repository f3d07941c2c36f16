//! Inline Field Error Component

use leptos::prelude::*;

use crate::validation::{Field, FormErrors};

/// Error slot under a form field, empty until `errors` names the field
#[component]
pub fn FieldErrorText(field: Field, errors: RwSignal<FormErrors>) -> impl IntoView {
    let message = move || errors.with(|e| e.message(field));

    view! {
        <div
            id=field.error_id()
            class=move || if message().is_some() { "error-message show" } else { "error-message" }
        >
            {move || message().unwrap_or_default()}
        </div>
    }
}
