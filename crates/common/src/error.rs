//! Input validation errors.

use thiserror::Error;

/// Errors produced by validating factories before any I/O is performed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only.
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    /// A numeric field that must be non-negative was negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    /// A numeric field that must be strictly positive was zero or negative.
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    /// The value is not a plausible email address.
    #[error("invalid email address: {value}")]
    InvalidEmail { value: String },
}
