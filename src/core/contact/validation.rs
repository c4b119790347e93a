//! Validation rules for contact form submissions
//!
//! Compiled for both the server and the WASM bundle so the browser form and
//! the API endpoint apply identical rules.

use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// Minimum length for the submitter's name
pub const NAME_MIN_LENGTH: usize = 2;

/// Minimum length for the project brief
pub const BRIEF_MIN_LENGTH: usize = 10;

/// Maximum length for the project brief
pub const BRIEF_MAX_LENGTH: usize = 140;

/// Raw contact form payload as submitted by the client.
///
/// Missing fields deserialize as empty strings so a structurally incomplete
/// payload still flows through validation and gets field-level errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub brief: String,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A contact submission that has passed every validation rule.
///
/// Fields are private so the only way to obtain one is through
/// [`validate_contact`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedContact {
    name: String,
    email: String,
    brief: String,
}

impl ValidatedContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn brief(&self) -> &str {
        &self.brief
    }
}

/// Validate the submitter's name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().count() < NAME_MIN_LENGTH {
        return Err(format!(
            "Name must be at least {} characters",
            NAME_MIN_LENGTH
        ));
    }
    Ok(())
}

/// Validate the submitter's email address
///
/// Requires a dot in the domain part, so `user@localhost` is rejected the
/// same way browser-side email widgets reject it.
pub fn validate_email(email: &str) -> Result<(), String> {
    let valid = match EmailAddress::from_str(email) {
        Ok(address) => address.domain().contains('.'),
        Err(_) => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

/// Validate the project brief
///
/// Length is counted in Unicode scalar values, matching the live counter
/// shown next to the textarea.
pub fn validate_brief(brief: &str) -> Result<(), String> {
    let length = brief.chars().count();
    if length < BRIEF_MIN_LENGTH {
        return Err(format!(
            "Brief must be at least {} characters",
            BRIEF_MIN_LENGTH
        ));
    }
    if length > BRIEF_MAX_LENGTH {
        return Err(format!(
            "Brief must be at most {} characters",
            BRIEF_MAX_LENGTH
        ));
    }
    Ok(())
}

/// Validate a full contact submission.
///
/// All fields are checked even after the first failure, so the caller gets
/// one error per invalid field rather than just the first one.
pub fn validate_contact(input: &ContactInput) -> Result<ValidatedContact, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(message) = validate_name(&input.name) {
        errors.push(FieldError::new("name", message));
    }
    if let Err(message) = validate_email(&input.email) {
        errors.push(FieldError::new("email", message));
    }
    if let Err(message) = validate_brief(&input.brief) {
        errors.push(FieldError::new("brief", message));
    }

    if errors.is_empty() {
        Ok(ValidatedContact {
            name: input.name.clone(),
            email: input.email.clone(),
            brief: input.brief.clone(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactInput {
        ContactInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            brief: "We need a private AI deployment.".to_string(),
        }
    }

    #[test]
    fn test_valid_contact_passes() {
        let validated = validate_contact(&valid_input()).unwrap();
        assert_eq!(validated.name(), "Jane Doe");
        assert_eq!(validated.email(), "jane@example.com");
        assert_eq!(validated.brief(), "We need a private AI deployment.");
    }

    #[test]
    fn test_name_boundaries() {
        assert!(validate_name("").is_err());
        assert!(validate_name("J").is_err());
        assert!(validate_name("Jo").is_ok());
        assert!(validate_name("Jane Doe").is_ok());
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // Two non-ASCII characters, four bytes
        assert!(validate_name("Łű").is_ok());
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(validate_email("user@domain.tld").is_ok());
        assert!(validate_email("first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing-at.example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_email_rejects_dotless_domain() {
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("user@domain").is_err());
    }

    #[test]
    fn test_brief_boundaries() {
        assert!(validate_brief(&"a".repeat(9)).is_err());
        assert!(validate_brief(&"a".repeat(10)).is_ok());
        assert!(validate_brief(&"a".repeat(140)).is_ok());
        assert!(validate_brief(&"a".repeat(141)).is_err());
    }

    #[test]
    fn test_brief_counts_characters_not_bytes() {
        // 140 two-byte characters is 280 bytes but still within the limit
        let brief: String = "é".repeat(140);
        assert!(validate_brief(&brief).is_ok());

        let too_long: String = "é".repeat(141);
        assert!(validate_brief(&too_long).is_err());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let input = ContactInput {
            name: "J".to_string(),
            email: "nope".to_string(),
            brief: "short".to_string(),
        };

        let errors = validate_contact(&input).unwrap_err();
        assert_eq!(errors.len(), 3);

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "brief"]);
    }

    #[test]
    fn test_single_invalid_field_reports_only_that_field() {
        let input = ContactInput {
            email: "broken".to_string(),
            ..valid_input()
        };

        let errors = validate_contact(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Please enter a valid email address");
    }

    #[test]
    fn test_field_error_serialization() {
        let error = FieldError::new("name", "Name must be at least 2 characters");
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("\"field\":\"name\""));
        assert!(json.contains("Name must be at least 2 characters"));
    }

    #[test]
    fn test_contact_input_deserialization() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "brief": "Exploring secure on-prem models."
        }"#;

        let input: ContactInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.brief, "Exploring secure on-prem models.");
    }

    #[test]
    fn test_contact_input_missing_fields_default_to_empty() {
        let json = r#"{
            "email": "jane@example.com",
            "brief": "Exploring secure on-prem models."
        }"#;

        let input: ContactInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.name, "");
        assert_eq!(input.email, "jane@example.com");

        let errors = validate_contact(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }
}
