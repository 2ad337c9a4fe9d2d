//! User List Component
//!
//! Stored records with a delete button each. Hidden while empty.

use leptos::prelude::*;
use user_records::Record;

use crate::context::use_form_context;
use crate::store::FormViewStoreFields;

/// List of stored user details
#[component]
pub fn UserList() -> impl IntoView {
    let store = use_form_context().store();
    let has_records = move || store.records().with(|records| !records.is_empty());

    view! {
        <Show when=has_records>
            <div class="mt-5">
                <h3 class="text-center">"Stored User Details"</h3>
                <ul class="list-group mt-3">
                    <For
                        each=move || store.records().get()
                        key=|record| record.id
                        children=move |record| view! { <UserRow record=record /> }
                    />
                </ul>
            </div>
        </Show>
    }
}

/// One stored record
#[component]
fn UserRow(record: Record) -> impl IntoView {
    let ctx = use_form_context();
    let id = record.id;

    view! {
        <li class="list-group-item d-flex justify-content-between align-items-center shadow-sm">
            <div>
                <strong class="text-primary">{record.full_name()}</strong>
                <div>{contact_line(&record)}</div>
                <small class="text-muted">{format!("🏠 {}", record.address)}</small>
            </div>
            <button class="btn btn-danger btn-md" on:click=move |_| ctx.delete(id)>
                "Delete"
            </button>
        </li>
    }
}

/// Phone and email summary line
pub fn contact_line(record: &Record) -> String {
    format!("📞 {} | ✉️ {}", record.phone_number, record.email)
}
