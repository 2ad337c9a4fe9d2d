//! Record Directory
//!
//! The cached record collection and the read-modify-write cycle that keeps
//! it in step with the store. The cache is only replaced after a save
//! succeeds, so the displayed list never drifts from what was persisted.

use log::{debug, info};

use crate::domain::{Draft, Field, Record, RecordError, RecordId, RecordResult};
use crate::ids::IdGenerator;
use crate::repository::RecordStore;

/// Cached view over a [`RecordStore`]
#[derive(Debug)]
pub struct RecordDirectory<S> {
    store: S,
    records: Vec<Record>,
    ids: IdGenerator,
}

impl<S: RecordStore> RecordDirectory<S> {
    /// Load the collection once and cache it
    pub fn mount(store: S) -> Self {
        let records = store.load();
        let mut ids = IdGenerator::new();
        for record in &records {
            ids.observe(record.id);
        }
        info!("Mounted record directory with {} records", records.len());
        Self { store, records, ids }
    }

    /// Records currently displayed, in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a record built from `draft`.
    ///
    /// The stored collection is re-read first so the duplicate check sees
    /// what is actually persisted.
    pub fn insert(&mut self, draft: &Draft) -> RecordResult<Record> {
        let mut current = self.store.load();
        if let Some(field) = find_conflict(&current, draft) {
            debug!("Rejected duplicate {}", field);
            return Err(RecordError::Duplicate { field });
        }

        for record in &current {
            self.ids.observe(record.id);
        }
        let record = draft.to_record(self.ids.next_id());
        current.push(record.clone());

        self.store.save(&current)?;
        self.records = current;
        info!("Saved record {} ({} total)", record.id, self.records.len());
        Ok(record)
    }

    /// Remove the record with `id` from the displayed list and persist the rest.
    ///
    /// Returns `false` (and writes nothing) when no such record is shown.
    pub fn delete(&mut self, id: RecordId) -> RecordResult<bool> {
        if !self.records.iter().any(|record| record.id == id) {
            debug!("Delete of unknown record {} ignored", id);
            return Ok(false);
        }

        let remaining: Vec<Record> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();

        self.store.save(&remaining)?;
        self.records = remaining;
        info!("Deleted record {} ({} left)", id, self.records.len());
        Ok(true)
    }
}

/// First field of `draft` that clashes with a stored record, email before phone
pub fn find_conflict(records: &[Record], draft: &Draft) -> Option<Field> {
    let phone = draft.normalized_phone();
    records
        .iter()
        .find_map(|record| record.conflict_with(&draft.email, &phone))
}
