//! Field validators shared by the interactive and scripted prompters
//!
//! Lengths are counted in characters. Every validator checks the value of its own
//! field.

use crate::error::{BefossError, Result};

/// Validator signature accepted by text prompts
pub type Validator = fn(&str) -> Result<()>;

fn check_length(value: &str, min: usize, max: usize, short: &str, long: &str) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        Err(BefossError::Validation(short.to_string()))
    } else if len > max {
        Err(BefossError::Validation(long.to_string()))
    } else {
        Ok(())
    }
}

/// Author name: 2 to 30 characters
pub fn full_name(value: &str) -> Result<()> {
    check_length(value, 2, 30, "Your name is too short", "Your name is too long")
}

/// Program description: 15 to 60 characters
pub fn description(value: &str) -> Result<()> {
    check_length(
        value,
        15,
        60,
        "Your description is weak!",
        "Your description's too long man, keep it simple geez.",
    )
}

/// Custom licence title: 2 to 40 characters
pub fn licence_title(value: &str) -> Result<()> {
    check_length(
        value,
        2,
        40,
        "Your licence title is too short",
        "Your licence title is too long",
    )
}

/// Custom licence short description: 2 to 40 characters
pub fn licence_short(value: &str) -> Result<()> {
    check_length(
        value,
        2,
        40,
        "Your short description is too short",
        "Your short description is too long",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_bounds() {
        for len in 2..=30 {
            assert!(full_name(&"a".repeat(len)).is_ok(), "length {} rejected", len);
        }
        assert!(full_name("a").is_err());
        assert!(full_name("").is_err());
        assert!(full_name(&"a".repeat(31)).is_err());
        assert!(full_name(&"a".repeat(80)).is_err());
    }

    #[test]
    fn test_full_name_counts_characters() {
        // 15 two-byte characters is still 15 characters
        assert!(full_name(&"é".repeat(15)).is_ok());
    }

    #[test]
    fn test_full_name_error_is_validation() {
        let err = full_name("J").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Your name is too short");
    }

    #[test]
    fn test_description_checks_its_own_value() {
        assert!(description("A sample tool for testing").is_ok());
        assert!(description("tiny").is_err());
        assert!(description(&"d".repeat(61)).is_err());
    }

    #[test]
    fn test_custom_licence_fields() {
        assert!(licence_title("Zed Licence").is_ok());
        assert!(licence_title("Z").is_err());
        assert!(licence_title(&"z".repeat(41)).is_err());
        assert!(licence_short("short text").is_ok());
        assert!(licence_short("s").is_err());
    }
}
