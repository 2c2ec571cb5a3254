//! Presence / uniqueness checks used by the configuration forms

use crate::shared::ordering::Keyed;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} '{value}' is already in use")]
    Duplicate { field: &'static str, value: String },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{0}")]
    Invalid(String),
}

pub type ValidationResult = Result<(), ValidationError>;

pub fn require(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub fn max_length(field: &'static str, value: &str, max: usize) -> ValidationResult {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub fn in_range(field: &'static str, value: i64, min: i64, max: i64) -> ValidationResult {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

/// Key must be present and not used by any item of `existing`.
pub fn unique_key<T: Keyed>(field: &'static str, key: &str, existing: &[T]) -> ValidationResult {
    require(field, key)?;
    let key = key.trim();
    if existing.iter().any(|item| item.key() == key) {
        return Err(ValidationError::Duplicate {
            field,
            value: key.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct K(&'static str);

    impl Keyed for K {
        fn key(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_require() {
        assert!(require("Key", "abc").is_ok());
        assert_eq!(
            require("Key", "   "),
            Err(ValidationError::Required { field: "Key" })
        );
    }

    #[test]
    fn test_unique_key() {
        let existing = [K("first"), K("second")];
        assert!(unique_key("Key", "third", &existing).is_ok());
        let err = unique_key("Key", " first ", &existing).unwrap_err();
        assert_eq!(err.to_string(), "Key 'first' is already in use");
        assert!(matches!(
            unique_key("Key", "", &existing),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_max_length_counts_chars() {
        assert!(max_length("Note", "привет", 6).is_ok());
        assert!(max_length("Note", "привет!", 6).is_err());
    }

    #[test]
    fn test_in_range_message() {
        let err = in_range("Width", 5, 1, 4).unwrap_err();
        assert_eq!(err.to_string(), "Width must be between 1 and 4");
    }
}
