//! In-Memory Stores
//!
//! Fakes for tests and for hosts without browser storage.

use std::collections::HashMap;

use super::traits::{KeyValueStore, RecordStore};
use crate::domain::{Record, RecordResult, StorageError};

/// A [`KeyValueStore`] backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValue {
    items: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryKeyValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every read fail as if storage were unavailable
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every write fail as if the quota were exceeded
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KeyValueStore for MemoryKeyValue {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A [`RecordStore`] that keeps the collection as a plain `Vec`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of successful `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn save(&mut self, records: &[Record]) -> RecordResult<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
