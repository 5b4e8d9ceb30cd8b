//! Core error types for the transaction service.
//!
//! Errors fall into two tiers: client-caused validation failures and everything
//! else, which is reported as an upstream failure. The HTTP layer maps the first
//! tier to 400 and the second to 500.

use std::num::ParseIntError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Any failure raised by or around the banking client. Never retried.
    #[error("{0}")]
    Upstream(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl Error {
    /// True for errors the caller caused and can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Validation errors for query input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid datetime format: {0}")]
    InvalidDateTime(#[from] ParseError),

    #[error("from_date must be before or equal to to_date")]
    InvalidDateRange,

    #[error("PIN must be exactly {expected} characters")]
    InvalidPin { expected: usize },

    #[error("Missing required query parameter: {0}")]
    MissingParameter(String),
}

/// Reasons a `hh-mm-ss-dd-mm-yyyy` string can fail to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format. Expected: hh-mm-ss-dd-mm-yyyy")]
    TokenCount(usize),

    #[error("invalid integer component '{token}': {reason}")]
    NotAnInteger { token: String, reason: String },

    #[error("{0}")]
    OutOfRange(String),
}

impl ParseError {
    pub(crate) fn not_an_integer(token: &str, err: ParseIntError) -> Self {
        ParseError::NotAnInteger {
            token: token.to_string(),
            reason: err.to_string(),
        }
    }
}
