//! Form View Store
//!
//! Reactive mirror of the form session, using reactive_stores for
//! field-level reactivity. The session stays the source of truth; these
//! helpers copy its state across after every operation.

use leptos::prelude::*;
use reactive_stores::Store;
use user_records::{Draft, ErrorMap, Notice, Phase, Record, RecordStore, FormSession};

/// What the components render
#[derive(Clone, Debug, Default, Store)]
pub struct FormView {
    /// Current draft values
    pub draft: Draft,
    /// Inline messages from the last validation pass
    pub errors: ErrorMap,
    pub phase: Phase,
    /// Stored records, in insertion order
    pub records: Vec<Record>,
    /// Banner for the last submit or delete
    pub notice: Option<Notice>,
}

impl FormView {
    pub fn from_session<S: RecordStore>(session: &FormSession<S>) -> Self {
        Self {
            draft: session.draft().clone(),
            errors: session.errors().clone(),
            phase: session.phase(),
            records: session.records().to_vec(),
            notice: None,
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormView>;

// ========================
// Store Helper Functions
// ========================

/// Copy the draft and phase after an input event
pub fn store_sync_draft<S: RecordStore>(store: &FormStore, session: &FormSession<S>) {
    store.draft().set(session.draft().clone());
    store.phase().set(session.phase());
}

/// Copy the displayed record list
pub fn store_sync_records<S: RecordStore>(store: &FormStore, session: &FormSession<S>) {
    store.records().set(session.records().to_vec());
}

/// Copy everything a submit can change
pub fn store_sync_all<S: RecordStore>(store: &FormStore, session: &FormSession<S>) {
    store_sync_draft(store, session);
    store.errors().set(session.errors().clone());
    store_sync_records(store, session);
}

/// Show or clear the notice banner
pub fn store_set_notice(store: &FormStore, notice: Option<Notice>) {
    store.notice().set(notice);
}
