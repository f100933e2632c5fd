use thiserror::Error;

/// A document failed its schema constraints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Validation failed for `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Required field was absent or empty.
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }
}

/// Returns the value of a required field, or a `required` error naming it.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::required(field))
}

/// Rejects empty strings in required string fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_names_field() {
        let err = ValidationError::required("likes");
        assert_eq!(err.to_string(), "Validation failed for `likes`: is required");
    }

    #[test]
    fn test_require_helpers() {
        assert_eq!(require("likes", Some(3)), Ok(3));
        assert_eq!(require::<i64>("likes", None), Err(ValidationError::required("likes")));
        assert!(require_non_empty("urls.thumb", "").is_err());
        assert!(require_non_empty("urls.thumb", "https://x").is_ok());
    }
}
