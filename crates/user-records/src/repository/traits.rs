//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for record persistence.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::{Record, RecordResult, StorageError};

/// Persistence adapter for the full record collection
///
/// The collection is always read and written whole; there is no
/// per-record access.
pub trait RecordStore {
    /// Load the collection. Missing or unreadable data is an empty collection.
    fn load(&self) -> Vec<Record>;

    /// Replace the stored collection with `records`
    fn save(&mut self, records: &[Record]) -> RecordResult<()>;
}

/// Synchronous string key-value backend (e.g. `window.localStorage`)
pub trait KeyValueStore {
    /// Read a slot; `Ok(None)` when the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

