//! Custom error types for Penny
//!
//! This module defines the application error hierarchy using thiserror.
//! Form validation failures have their own type in `models::validation` and
//! convert into `PennyError` when they need to cross a layer boundary.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for Penny operations
#[derive(Error, Debug)]
pub enum PennyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected form input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl PennyError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PennyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Penny operations
pub type PennyResult<T> = Result<T, PennyError>;
