use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

/// Failures reported by a [`crate::UserStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage-level uniqueness constraint on the normalized email rejected the record.
    #[error("Duplicate email {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Any other storage failure. The message is for operators, never for callers.
    #[error("Storage backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
pub type StoreResult<T> = StdResult<T, StoreError>;
