//! Pure field-validation rules shared by the request DTOs.
//!
//! All length bounds count characters rather than bytes, so multibyte input
//! is measured the way users see it. Every rule names the offending field in
//! its error message.

use crate::error::CoreError;

/// Check a required string field against inclusive character-count bounds.
pub fn require_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Check an optional string field against inclusive bounds; absent passes.
pub fn optional_length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), CoreError> {
    match value {
        Some(v) => require_length(field, v, min, max),
        None => Ok(()),
    }
}

/// Check an optional string field against a maximum length only.
pub fn optional_max_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CoreError> {
    if let Some(v) = value {
        if v.chars().count() > max {
            return Err(CoreError::Validation(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    Ok(())
}

/// Check an optional integer field against an inclusive range.
pub fn optional_range(
    field: &'static str,
    value: Option<i32>,
    min: i32,
    max: i32,
) -> Result<(), CoreError> {
    if let Some(v) = value {
        if v < min || v > max {
            return Err(CoreError::Validation(format!(
                "{field} must be between {min} and {max}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_length_accepts_bounds_inclusive() {
        assert!(require_length("name", "abc", 3, 100).is_ok());
        assert!(require_length("name", &"x".repeat(100), 3, 100).is_ok());
    }

    #[test]
    fn require_length_rejects_too_short_and_too_long() {
        assert!(require_length("name", "ab", 3, 100).is_err());
        assert!(require_length("name", &"x".repeat(101), 3, 100).is_err());
    }

    #[test]
    fn require_length_counts_characters_not_bytes() {
        // Three characters, six bytes.
        assert!(require_length("name", "äöü", 3, 3).is_ok());
        assert!(require_length("name", "äö", 3, 100).is_err());
    }

    #[test]
    fn require_length_error_names_the_field() {
        let err = require_length("title", "x", 3, 150).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn optional_length_passes_when_absent() {
        assert!(optional_length("name", None, 3, 100).is_ok());
        assert!(optional_length("name", Some("ab"), 3, 100).is_err());
    }

    #[test]
    fn optional_max_length_checks_only_the_upper_bound() {
        assert!(optional_max_length("description", None, 500).is_ok());
        assert!(optional_max_length("description", Some(""), 500).is_ok());
        assert!(optional_max_length("description", Some(&"x".repeat(500)), 500).is_ok());
        assert!(optional_max_length("description", Some(&"x".repeat(501)), 500).is_err());
    }

    #[test]
    fn optional_range_is_inclusive() {
        assert!(optional_range("priority", None, 1, 5).is_ok());
        assert!(optional_range("priority", Some(1), 1, 5).is_ok());
        assert!(optional_range("priority", Some(5), 1, 5).is_ok());
        assert!(optional_range("priority", Some(0), 1, 5).is_err());
        assert!(optional_range("priority", Some(6), 1, 5).is_err());
    }
}
