//! Domain Layer
//!
//! Records, drafts and the errors raised around them.
//! This layer has NO external dependencies (except serde and thiserror).

mod draft;
mod error;
mod field;
mod record;

pub use draft::Draft;
pub(crate) use draft::digits_only;
pub use error::{RecordError, RecordResult, StorageError};
pub use field::Field;
pub use record::{Record, RecordId};
