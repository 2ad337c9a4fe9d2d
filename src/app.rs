//! User Details App
//!
//! Mounts the form session against browser storage and lays out the page.

use leptos::prelude::*;
use user_records::{FormSession, RecordsConfig, SlotStore};

use crate::components::{NoticeBanner, UserForm, UserList};
use crate::context::FormContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: RecordsConfig) -> impl IntoView {
    // Stored records are read exactly once, here
    let session = FormSession::mount(SlotStore::from_config(BrowserStorage, &config));
    provide_context(FormContext::new(session));

    view! {
        <h1 class="text-center">"User Details Collection"</h1>
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-8">
                    <NoticeBanner />
                    <UserForm />
                    <UserList />
                </div>
            </div>
        </div>
    }
}
