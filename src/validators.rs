//! Input validation utilities shared by the services.

use uuid::Uuid;

use crate::error::{AppError, Result};

/// Trim and require a non-empty text field.
pub fn require_trimmed(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} field is required")));
    }
    Ok(trimmed.to_string())
}

/// Parse a path identifier, rejecting malformed UUIDs as invalid input.
pub fn parse_id(raw: &str, label: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("{label} is invalid")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_content_is_returned() {
        assert_eq!(require_trimmed("  hello ", "content").unwrap(), "hello");
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        assert!(require_trimmed("   ", "content").is_err());
        assert!(require_trimmed("", "content").is_err());
        assert!(require_trimmed("\n\t", "content").is_err());
    }

    #[test]
    fn valid_uuid_parses_with_surrounding_whitespace() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&format!(" {id} "), "videoId").unwrap(), id);
    }

    #[test]
    fn malformed_uuid_is_invalid_input() {
        let err = parse_id("not-a-uuid", "videoId").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
