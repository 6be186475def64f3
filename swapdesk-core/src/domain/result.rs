//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every error here surfaces as a transient user-visible notice; none is
/// fatal and none is retried automatically.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please fill in all fields: {0} is missing")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User already exists")]
    DuplicateEmail,

    /// Carries the exact user-facing message.
    #[error("{0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
