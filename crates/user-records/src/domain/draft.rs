//! Draft
//!
//! The in-progress, unsaved record edited keystroke by keystroke.

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::record::{Record, RecordId};

/// An unsaved record without an id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    /// Apply one input event to the draft.
    ///
    /// Phone input keeps digits only; the shape check happens at validation.
    pub fn apply_input(&mut self, field: Field, value: &str) {
        match field {
            Field::PhoneNumber => self.phone_number = digits_only(value),
            other => *self.slot_mut(other) = value.to_string(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
            Field::Address => &mut self.address,
        }
    }

    /// Builder-style variant of [`Draft::apply_input`]
    pub fn with(mut self, field: Field, value: &str) -> Self {
        self.apply_input(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Phone number as it is stored and compared: digits only
    pub fn normalized_phone(&self) -> String {
        digits_only(&self.phone_number)
    }

    /// Stamp the draft with an id, producing the record to store
    pub fn to_record(&self, id: RecordId) -> Record {
        Record {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.normalized_phone(),
            email: self.email.clone(),
            address: self.address.clone(),
            id,
        }
    }
}

/// Strip every non-digit character
pub(crate) fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_input_keeps_digits_only() {
        let mut draft = Draft::new();
        for raw in ["(012) 345-6789", "+44 0123 456 789", "abc", "٠١٢", "0123456789"] {
            draft.apply_input(Field::PhoneNumber, raw);
            assert!(draft.phone_number.chars().all(|c| c.is_ascii_digit()), "{raw}");
        }
        draft.apply_input(Field::PhoneNumber, "(012) 345-6789");
        assert_eq!(draft.phone_number, "0123456789");
    }

    #[test]
    fn test_other_inputs_are_stored_verbatim() {
        let draft = Draft::new()
            .with(Field::FirstName, "  Jane ")
            .with(Field::Address, "1 Main St\nFlat 2");
        assert_eq!(draft.first_name, "  Jane ");
        assert_eq!(draft.address, "1 Main St\nFlat 2");
        assert_eq!(draft.get(Field::LastName), "");
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut draft = Draft::new().with(Field::Email, "a@b.com");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_to_record_copies_fields() {
        let draft = Draft::new()
            .with(Field::FirstName, "Jane")
            .with(Field::PhoneNumber, "0123456789");
        let record = draft.to_record(RecordId(42));
        assert_eq!(record.id, RecordId(42));
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.phone_number, "0123456789");
    }

    #[test]
    fn test_to_record_strips_phone_set_directly() {
        let mut draft = Draft::new();
        draft.phone_number = "012-345 6789".to_string();
        assert_eq!(draft.to_record(RecordId(1)).phone_number, "0123456789");
    }
}
