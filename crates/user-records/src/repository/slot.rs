//! Slot Store
//!
//! Keeps the whole collection as one JSON array under a single key.

use log::{debug, warn};
use serde_json::Value;

use super::traits::{KeyValueStore, RecordStore};
use crate::config::RecordsConfig;
use crate::domain::{Record, RecordResult};

/// A [`RecordStore`] holding the collection as a JSON array in one slot
#[derive(Debug, Clone)]
pub struct SlotStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> SlotStore<K> {
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn from_config(backend: K, config: &RecordsConfig) -> Self {
        Self::new(backend, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }
}

impl<K: KeyValueStore> RecordStore for SlotStore<K> {
    fn load(&self) -> Vec<Record> {
        match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => decode_collection(&raw),
            Ok(None) => {
                debug!("Slot '{}' is empty", self.key);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read slot '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[Record]) -> RecordResult<()> {
        let raw = encode_collection(records)?;
        self.backend.set_item(&self.key, &raw)?;
        debug!("Saved {} records to slot '{}'", records.len(), self.key);
        Ok(())
    }
}

/// Serialize a collection to its stored JSON form
pub fn encode_collection(records: &[Record]) -> RecordResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Parse a stored collection.
///
/// Anything that is not a JSON array reads as empty; entries that are not
/// valid records are skipped. Skipped entries are not kept anywhere, so the
/// next `save` of the decoded collection drops them from the slot for good.
pub fn decode_collection(raw: &str) -> Vec<Record> {
    let entries = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Stored collection is unreadable, starting empty: {}", e);
            return Vec::new();
        }
    };

    let total = entries.len();
    let records: Vec<Record> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if records.len() < total {
        warn!("Skipped {} malformed stored records", total - records.len());
    }
    records
}
