//! Core error types for the clinic billing core.
//!
//! Storage failures reported by the external data store are converted to
//! [`Error::Repository`] / [`Error::NotFound`] by the repository implementations.

use std::num::ParseIntError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for billing and liquidation operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Month {0} is out of range (expected 1-12)")]
    MonthOutOfRange(u32),

    #[error("Failed to parse integer: {0}")]
    IntegerParse(#[from] ParseIntError),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

/// Shorthand used by validators across the crate.
pub(crate) fn invalid_input(message: impl Into<String>) -> Error {
    Error::Validation(ValidationError::InvalidInput(message.into()))
}
