//! User Records Core
//!
//! Layered architecture:
//! - domain: records, drafts, fields and errors
//! - validation: pure draft validation producing an error map
//! - repository: the storage seam and its slot/in-memory implementations
//! - directory: the cached collection and its read-modify-write cycle
//! - form: the submission state machine driven by the UI

pub mod config;
pub mod directory;
pub mod domain;
pub mod form;
pub mod ids;
pub mod repository;
pub mod validation;

pub use config::RecordsConfig;
pub use directory::RecordDirectory;
pub use domain::{Draft, Field, Record, RecordError, RecordId, RecordResult, StorageError};
pub use form::{FormSession, Notice, NoticeKind, Phase, SubmitOutcome};
pub use ids::IdGenerator;
pub use repository::{KeyValueStore, MemoryKeyValue, MemoryStore, RecordStore, SlotStore};
pub use validation::{validate, ErrorMap};
