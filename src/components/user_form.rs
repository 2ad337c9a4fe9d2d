//! User Form Component
//!
//! The details form: four text inputs, an address textarea and submit.

use leptos::prelude::*;
use user_records::{Field, Phase};

use crate::components::FieldInput;
use crate::context::use_form_context;
use crate::store::FormViewStoreFields;

/// Single-line fields and their HTML input types
const TEXT_FIELDS: &[(Field, &str)] = &[
    (Field::FirstName, "text"),
    (Field::LastName, "text"),
    (Field::PhoneNumber, "text"),
    (Field::Email, "email"),
];

/// Form for entering a new user's details
#[component]
pub fn UserForm() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store();

    // Validation is ours, not the browser's: the form is `novalidate`
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <div class=move || card_class(store.phase().get())>
            <div class="card-header bg-primary text-white text-center">
                <h3 class="mb-0">"User Details Form"</h3>
            </div>
            <div class="card-body">
                <form novalidate=true on:submit=on_submit>
                    {TEXT_FIELDS
                        .iter()
                        .map(|(field, input_type)| view! { <FieldInput field=*field input_type=*input_type /> })
                        .collect_view()}

                    <FieldInput field=Field::Address multiline=true />

                    <button type="submit" class="btn btn-primary btn-lg w-100">
                        "Submit"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Card outline for the last submit result
pub fn card_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Editing => "card shadow-lg border-0",
        Phase::Rejected => "card shadow-lg border border-danger",
        Phase::Accepted => "card shadow-lg border border-success",
    }
}
