//! Record Entity
//!
//! A saved set of user details, identified by a timestamp-shaped id.

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Unique identifier of a stored record
///
/// Serialized as a bare JSON integer (milliseconds since the epoch at
/// creation time, bumped when needed to stay unique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted user record
///
/// Field order follows the stored JSON layout: details first, id last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// Digits only, 10 long with a leading zero
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub id: RecordId,
}

impl Record {
    /// "First Last", as shown in the stored list
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Field on which this record clashes with the given email or phone, email first
    pub fn conflict_with(&self, email: &str, phone_number: &str) -> Option<Field> {
        if self.email == email {
            Some(Field::Email)
        } else if self.phone_number == phone_number {
            Some(Field::PhoneNumber)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Record {
        Record {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "0123456789".to_string(),
            email: "jane@doe.com".to_string(),
            address: "1 Main St".to_string(),
            id: RecordId(1_700_000_000_000),
        }
    }

    #[test]
    fn test_record_uses_camel_case_wire_names() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["phoneNumber"], "0123456789");
        assert_eq!(json["email"], "jane@doe.com");
        assert_eq!(json["address"], "1 Main St");
        assert_eq!(json["id"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(jane().full_name(), "Jane Doe");
    }

    #[test]
    fn test_conflicts_on_email_or_phone() {
        let record = jane();
        assert_eq!(record.conflict_with("jane@doe.com", "0999999999"), Some(Field::Email));
        assert_eq!(record.conflict_with("other@doe.com", "0123456789"), Some(Field::PhoneNumber));
        assert_eq!(record.conflict_with("jane@doe.com", "0123456789"), Some(Field::Email));
        assert_eq!(record.conflict_with("other@doe.com", "0999999999"), None);
        // Email comparison is exact
        assert_eq!(record.conflict_with("Jane@Doe.com", "0999999999"), None);
    }
}
