// File: src/result.rs
// Purpose: Validation outcome type

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of validating a record against a schema.
///
/// Holds at most one message per field (the first failing rule wins).
/// `is_valid()` is true exactly when the error map is empty; the fields
/// are private so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: HashMap<String, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
        }
    }

    /// Create a result from collected errors. An empty map means success.
    pub fn from_errors(errors: HashMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert from a `Validate`-style Result
    pub fn from_result(result: Result<(), HashMap<String, String>>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(errors) => Self::from_errors(errors),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get the error message for a specific field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|msg| msg.as_str())
    }

    /// All errors, keyed by field name
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> HashMap<String, String> {
        self.errors
    }

    /// Convert into a `Validate`-style Result
    pub fn into_result(self) -> Result<(), HashMap<String, String>> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Fold another result into this one. Fields already carrying an
    /// error keep their existing message.
    pub fn merge(&mut self, other: ValidationResult) {
        for (field, message) in other.errors {
            self.errors.entry(field).or_insert(message);
        }
        self.is_valid = self.errors.is_empty();
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_valid() {
        let result = ValidationResult::success();
        assert!(result.is_valid());
        assert!(!result.has_errors());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_empty_error_map_is_success() {
        let result = ValidationResult::from_errors(HashMap::new());
        assert!(result.is_valid());
    }

    #[test]
    fn test_from_errors() {
        let mut errors = HashMap::new();
        errors.insert("email".to_string(), "Must be a valid email address".to_string());
        let result = ValidationResult::from_errors(errors);
        assert!(!result.is_valid());
        assert!(result.has_error("email"));
        assert_eq!(result.error("email"), Some("Must be a valid email address"));
        assert_eq!(result.error("name"), None);

        let owned = result.into_errors();
        assert_eq!(
            owned.get("email").map(String::as_str),
            Some("Must be a valid email address")
        );
    }

    #[test]
    fn test_merge_keeps_first_message() {
        let mut first = ValidationResult::from_errors(HashMap::from([(
            "email".to_string(),
            "This field is required".to_string(),
        )]));
        let second = ValidationResult::from_errors(HashMap::from([
            ("email".to_string(), "Must be a valid email address".to_string()),
            ("phone".to_string(), "Must be a valid phone number".to_string()),
        ]));
        first.merge(second);
        assert!(!first.is_valid());
        assert_eq!(first.error("email"), Some("This field is required"));
        assert_eq!(first.error("phone"), Some("Must be a valid phone number"));
    }

    #[test]
    fn test_merge_into_success() {
        let mut result = ValidationResult::success();
        result.merge(ValidationResult::success());
        assert!(result.is_valid());

        result.merge(ValidationResult::from_errors(HashMap::from([(
            "age".to_string(),
            "Must be a number".to_string(),
        )])));
        assert!(!result.is_valid());
    }
}
