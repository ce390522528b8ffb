//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s]*$").expect("alphanumeric pattern"));

/// Fails with "<label> is required" for empty or whitespace-only input
pub fn validate_required(s: &str, label: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

/// Length in characters, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn validate_min_length(s: &str, min: usize, label: &str) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("{} must be at least {} characters", label, min))
    }
}

pub fn validate_max_length(s: &str, max: usize, label: &str) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("{} must be less than {} characters", label, max))
    }
}

/// ASCII letters, digits and whitespace only
pub fn is_alphanumeric_with_spaces(s: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(s)
}

pub fn validate_alphanumeric(s: &str, label: &str) -> Result<(), String> {
    if is_alphanumeric_with_spaces(s) {
        Ok(())
    } else {
        Err(format!("{} must contain only alphanumeric characters", label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("x", "Name").is_ok());
        assert_eq!(validate_required("", "Name"), Err("Name is required".to_string()));
        assert_eq!(validate_required(" \t ", "Name"), Err("Name is required".to_string()));
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 5, "Email").is_ok());
        assert!(validate_min_length("hi", 5, "Email").is_err());

        assert!(validate_max_length("hello", 5, "Company").is_ok());
        assert_eq!(
            validate_max_length("verylongstring", 5, "Company"),
            Err("Company must be less than 5 characters".to_string())
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // Four characters, eight bytes
        assert_eq!(char_len("éééé"), 4);
        assert!(validate_max_length("éééé", 4, "Name").is_ok());
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric_with_spaces("Test User 2"));
        assert!(is_alphanumeric_with_spaces(""));
        assert!(!is_alphanumeric_with_spaces("O'Brien"));
        assert!(!is_alphanumeric_with_spaces("a-b"));
    }
}
