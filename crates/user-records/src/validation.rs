//! Draft Validation
//!
//! Pure rules mapping a draft to per-field error messages.
//! Every field is checked on each pass; an empty map means the draft is valid.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{digits_only, Draft, Field};

/// Names may not contain this term (case-insensitive)
const BLOCKED_NAME_TERM: &str = "google";

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^0\d{9}$").expect("phone pattern is valid"))
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"))
}

/// Field name to human-readable message, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validate a draft, returning every field-level problem found
pub fn validate(draft: &Draft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in [Field::FirstName, Field::LastName] {
        if let Some(message) = check_name(field, draft.get(field)) {
            errors.insert(field, message);
        }
    }

    let phone = digits_only(&draft.phone_number);
    if !phone_re().is_match(&phone) {
        errors.insert(Field::PhoneNumber, "Enter a valid 10-digit phone number starting with 0");
    }

    if !email_re().is_match(&draft.email) {
        errors.insert(Field::Email, "Enter a valid Email ID");
    }

    if draft.address.trim().is_empty() {
        errors.insert(Field::Address, "Address is required");
    }

    errors
}

fn check_name(field: Field, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", field.label()))
    } else if value.to_lowercase().contains(BLOCKED_NAME_TERM) {
        Some(format!("{} cannot contain 'Google'", field.label()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Draft {
        Draft::new()
            .with(Field::FirstName, "Jane")
            .with(Field::LastName, "Doe")
            .with(Field::PhoneNumber, "0123456789")
            .with(Field::Email, "jane@doe.com")
            .with(Field::Address, "1 Main St")
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_empty_draft_flags_every_field() {
        let errors = validate(&Draft::new());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::FirstName), Some("First Name is required"));
        assert_eq!(errors.get(Field::LastName), Some("Last Name is required"));
        assert_eq!(errors.get(Field::Address), Some("Address is required"));
    }

    #[test]
    fn test_blank_required_fields_are_flagged() {
        for field in [Field::FirstName, Field::LastName, Field::Address] {
            for blank in ["", " ", "\t\n  "] {
                let draft = valid_draft().with(field, blank);
                let errors = validate(&draft);
                assert!(errors.contains(field), "{field} with {blank:?}");
                assert_eq!(errors.len(), 1);
            }
        }
    }

    #[test]
    fn test_names_reject_google_any_case() {
        let errors = validate(&valid_draft().with(Field::FirstName, "MyGoOgLe"));
        assert_eq!(errors.get(Field::FirstName), Some("First Name cannot contain 'Google'"));

        let errors = validate(&valid_draft().with(Field::LastName, "google"));
        assert_eq!(errors.get(Field::LastName), Some("Last Name cannot contain 'Google'"));

        assert!(validate(&valid_draft().with(Field::FirstName, "Goggle")).is_empty());
    }

    #[test]
    fn test_phone_shape() {
        let errors = validate(&valid_draft().with(Field::PhoneNumber, "123456789"));
        assert_eq!(
            errors.get(Field::PhoneNumber),
            Some("Enter a valid 10-digit phone number starting with 0")
        );

        for bad in ["1234567890", "01234567890", "012345678", ""] {
            assert!(validate(&valid_draft().with(Field::PhoneNumber, bad)).contains(Field::PhoneNumber), "{bad}");
        }

        assert!(!validate(&valid_draft().with(Field::PhoneNumber, "0123456789")).contains(Field::PhoneNumber));
    }

    #[test]
    fn test_phone_is_checked_after_stripping_non_digits() {
        let mut draft = valid_draft();
        // Bypass the input handler to simulate a raw value
        draft.phone_number = "012-345-6789".to_string();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_email_shape() {
        let errors = validate(&valid_draft().with(Field::Email, "not-an-email"));
        assert_eq!(errors.get(Field::Email), Some("Enter a valid Email ID"));

        for bad in ["a@b", "a b@c.com", "a@@b.com", "a@b@c.com", "@b.com", ""] {
            assert!(validate(&valid_draft().with(Field::Email, bad)).contains(Field::Email), "{bad}");
        }

        assert!(validate(&valid_draft().with(Field::Email, "user@example.com")).is_empty());
    }

    #[test]
    fn test_errors_iterate_in_form_order() {
        let fields: Vec<Field> = validate(&Draft::new()).iter().map(|(field, _)| field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_error_map_serializes_by_wire_name() {
        let json = serde_json::to_value(validate(&valid_draft().with(Field::Email, "x"))).unwrap();
        assert_eq!(json["email"], "Enter a valid Email ID");
    }
}
