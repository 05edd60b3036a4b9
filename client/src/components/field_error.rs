//! Inline validation message under a form field.

use leptos::prelude::*;

use crate::util::validate::{Field, FieldErrors};

#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .get()
            .get(field)
            .map(|message| view! { <p class="form__error" role="alert">{message}</p> })
    }
}
