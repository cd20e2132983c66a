//! Validation errors for user-entered records
//!
//! These are the only rejections the ledger and tracker can produce. They are
//! recovered locally: the add operation does nothing and the form stays open.

use thiserror::Error;

/// Why an expense or savings goal was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only
    #[error("{field} cannot be blank")]
    BlankField { field: &'static str },

    /// The parsed savings target was zero or negative
    #[error("Target must be greater than zero (got {target})")]
    NonPositiveTarget { target: i64 },
}

impl ValidationError {
    /// Create a blank-field error for the named field
    pub fn blank(field: &'static str) -> Self {
        Self::BlankField { field }
    }

    /// Check if this is a blank-field error
    pub fn is_blank_field(&self) -> bool {
        matches!(self, Self::BlankField { .. })
    }
}

/// Return the trimmed value, or a blank-field error naming `field`
pub fn require_text<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::blank("Title").to_string(),
            "Title cannot be blank"
        );
        assert_eq!(
            ValidationError::NonPositiveTarget { target: -5 }.to_string(),
            "Target must be greater than zero (got -5)"
        );
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("  Lunch ", "Title"), Ok("Lunch"));
        assert_eq!(
            require_text(" \t ", "Title"),
            Err(ValidationError::BlankField { field: "Title" })
        );
        assert!(require_text("", "Amount").unwrap_err().is_blank_field());
    }
}
