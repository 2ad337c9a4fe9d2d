//! Form Context
//!
//! The mounted form session and its reactive mirror, provided via the
//! Leptos Context API. All mutations go through here so the mirror is
//! refreshed from the session after each one.

use leptos::prelude::*;
use reactive_stores::Store;
use user_records::{Field, FormSession, Notice, NoticeKind, RecordId, SlotStore};

use crate::storage::BrowserStorage;
use crate::store::{
    store_set_notice, store_sync_all, store_sync_draft, store_sync_records, FormStore, FormView,
};

/// The session type used in the browser
pub type BrowserSession = FormSession<SlotStore<BrowserStorage>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    session: StoredValue<BrowserSession>,
    store: FormStore,
}

impl FormContext {
    pub fn new(session: BrowserSession) -> Self {
        let store = Store::new(FormView::from_session(&session));
        Self {
            session: StoredValue::new(session),
            store,
        }
    }

    pub fn store(&self) -> FormStore {
        self.store
    }

    /// One keystroke in `field`
    pub fn input(&self, field: Field, value: String) {
        self.session.update_value(|session| session.input(field, &value));
        self.session.with_value(|session| store_sync_draft(&self.store, session));
    }

    /// Validate and save the draft, then show the outcome
    pub fn submit(&self) {
        let Some(outcome) = self.session.try_update_value(|session| session.submit()) else {
            return;
        };
        self.session.with_value(|session| store_sync_all(&self.store, session));
        store_set_notice(&self.store, outcome.notice());
    }

    /// Delete a stored record
    pub fn delete(&self, id: RecordId) {
        match self.session.try_update_value(|session| session.delete(id)) {
            Some(Ok(true)) => {
                self.session.with_value(|session| store_sync_records(&self.store, session));
            }
            Some(Ok(false)) | None => {}
            Some(Err(e)) => store_set_notice(
                &self.store,
                Some(Notice::new(NoticeKind::Error, format!("Could not delete user details: {}", e))),
            ),
        }
    }

    pub fn dismiss_notice(&self) {
        store_set_notice(&self.store, None);
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
