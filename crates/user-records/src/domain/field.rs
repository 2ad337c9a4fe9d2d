//! Form Fields
//!
//! The closed set of fields a record carries.

use serde::{Deserialize, Serialize};

/// A user-editable field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Address,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Email,
        Field::Address,
    ];

    /// Wire name, as used in the persisted JSON and form `name` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
            Field::Address => "address",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::PhoneNumber => "Phone Number",
            Field::Email => "Email ID",
            Field::Address => "Address",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_serde() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_field_serializes_as_wire_name() {
        let json = serde_json::to_string(&Field::PhoneNumber).unwrap();
        assert_eq!(json, "\"phoneNumber\"");
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::Email.label(), "Email ID");
        assert_eq!(Field::FirstName.label(), "First Name");
    }
}
