//! Field Input Component
//!
//! One labelled form control bound to a draft field, with its inline error.

use leptos::prelude::*;
use user_records::Field;

use crate::context::use_form_context;
use crate::store::FormViewStoreFields;

/// Labelled input (or textarea) for one draft field
#[component]
pub fn FieldInput(
    field: Field,
    /// HTML input type for single-line fields
    #[prop(default = "text")]
    input_type: &'static str,
    /// Render a textarea instead of an input
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store();

    let value = move || store.draft().with(|draft| draft.get(field).to_string());
    let error = move || store.errors().with(|errors| errors.get(field).map(str::to_string));

    let control = if multiline {
        view! {
            <textarea
                name=field.as_str()
                class="form-control form-control-lg rounded-3"
                placeholder=placeholder(field)
                prop:value=value
                on:input=move |ev| ctx.input(field, event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                name=field.as_str()
                class="form-control form-control-lg rounded-3"
                placeholder=placeholder(field)
                prop:value=value
                on:input=move |ev| ctx.input(field, event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-3">
            <label class="form-label fw-bold">{field.label()}</label>
            {control}
            {move || error().map(|message| view! { <div class=error_class(multiline)>{message}</div> })}
        </div>
    }
}

/// "Enter First Name", etc.
pub fn placeholder(field: Field) -> String {
    format!("Enter {}", field.label())
}

/// Inline error classes; the textarea sits tighter to its message
pub fn error_class(multiline: bool) -> &'static str {
    if multiline {
        "text-danger mt-1"
    } else {
        "text-danger mt-2"
    }
}
