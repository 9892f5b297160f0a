use crate::error::{AppError, AppResult};

/// Longest accepted record name
pub const MAX_NAME_LENGTH: usize = 255;

/// Reject empty (or whitespace-only) text and text over `max_len` characters
pub fn validate_required(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Unwrap an optional body field that the route treats as mandatory
pub fn require_field(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("nginx", "Name", 10).is_ok());
        assert!(validate_required("   ", "Name", 10).is_err());
        assert!(validate_required("abcdefghijk", "Name", 10).is_err());
    }

    #[test]
    fn test_require_field() {
        assert_eq!(
            require_field(Some("failed".to_string()), "Status").unwrap(),
            "failed"
        );
        let err = require_field(Some(String::new()), "Status").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Status is required");
        assert!(require_field(None, "Content").is_err());
    }
}
