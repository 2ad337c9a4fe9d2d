//! Repository Layer
//!
//! The storage seam for the record collection and its implementations:
//! a JSON slot over any key-value backend, and in-memory fakes.

mod memory;
mod slot;
mod traits;


pub use memory::{MemoryKeyValue, MemoryStore};
pub use slot::{decode_collection, encode_collection, SlotStore};
pub use traits::{KeyValueStore, RecordStore};
