//! API utility functions
//!
//! Contains helper functions used by API handlers for input validation.

use crate::error::AppError;

/// Error message returned when a chat request carries no text
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Validate the text of a chat request
///
/// # Arguments
/// * `text` - Text extracted from the request body, if any
///
/// # Returns
/// * `Ok(&str)` - The text, unchanged
/// * `Err(AppError::Validation)` - Text is missing or empty
pub fn validate_message(text: Option<&str>) -> Result<&str, AppError> {
    match text {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(AppError::Validation(MESSAGE_REQUIRED.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message() {
        assert_eq!(validate_message(Some("Hello")).unwrap(), "Hello");
        // Whitespace is content; only the empty string is rejected
        assert_eq!(validate_message(Some("  ")).unwrap(), "  ");
    }

    #[test]
    fn test_validate_message_missing_or_empty() {
        for input in [None, Some("")] {
            match validate_message(input) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, MESSAGE_REQUIRED),
                other => panic!("Expected Validation error, got: {:?}", other),
            }
        }
    }
}
