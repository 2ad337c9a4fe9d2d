//! Form Session
//!
//! The submission state machine behind the user details form:
//! edit the draft, validate on submit, then save or reject.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::directory::RecordDirectory;
use crate::domain::{Draft, Field, Record, RecordError, RecordId, RecordResult};
use crate::repository::RecordStore;
use crate::validation::{validate, ErrorMap};

pub const SAVED_MESSAGE: &str = "User details saved successfully!";
pub const DUPLICATE_MESSAGE: &str = "User with this Email or Phone Number already exists!";

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Draft is being edited (initial state; re-entered on every input)
    #[default]
    Editing,
    /// Last submit failed validation, clashed with a stored record or could not be saved
    Rejected,
    /// Last submit was saved
    Accepted,
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A non-blocking message for the presentation layer to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; messages are shown inline
    Invalid(ErrorMap),
    /// A stored record already has this email or phone
    Duplicate { field: Field },
    /// The store refused the write
    Failed(String),
    /// Record appended and persisted
    Saved(Record),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }

    /// Banner message for this outcome; inline-only outcomes have none
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Duplicate { .. } => Some(Notice::new(NoticeKind::Warning, DUPLICATE_MESSAGE)),
            SubmitOutcome::Failed(reason) => Some(Notice::new(
                NoticeKind::Error,
                format!("Could not save user details: {}", reason),
            )),
            SubmitOutcome::Saved(_) => Some(Notice::new(NoticeKind::Success, SAVED_MESSAGE)),
        }
    }
}

/// Draft, error map and record directory for one mounted form
#[derive(Debug)]
pub struct FormSession<S> {
    draft: Draft,
    errors: ErrorMap,
    phase: Phase,
    directory: RecordDirectory<S>,
}

impl<S: RecordStore> FormSession<S> {
    /// Mount the form, loading stored records once
    pub fn mount(store: S) -> Self {
        Self {
            draft: Draft::new(),
            errors: ErrorMap::new(),
            phase: Phase::Editing,
            directory: RecordDirectory::mount(store),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn records(&self) -> &[Record] {
        self.directory.records()
    }

    pub fn directory(&self) -> &RecordDirectory<S> {
        &self.directory
    }

    /// Handle one keystroke in `field`
    pub fn input(&mut self, field: Field, value: &str) {
        self.draft.apply_input(field, value);
        self.phase = Phase::Editing;
    }

    /// Validate the draft and, when valid and unique, save it
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            debug!("Submit rejected with {} field errors", self.errors.len());
            self.phase = Phase::Rejected;
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        match self.directory.insert(&self.draft) {
            Ok(record) => {
                self.draft.clear();
                self.errors.clear();
                self.phase = Phase::Accepted;
                SubmitOutcome::Saved(record)
            }
            Err(RecordError::Duplicate { field }) => {
                self.phase = Phase::Rejected;
                SubmitOutcome::Duplicate { field }
            }
            Err(e) => {
                warn!("Submit failed: {}", e);
                self.phase = Phase::Rejected;
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Delete a displayed record; unknown ids are ignored
    pub fn delete(&mut self, id: RecordId) -> RecordResult<bool> {
        self.directory.delete(id).inspect_err(|e| warn!("Delete of {} failed: {}", id, e))
    }
}
