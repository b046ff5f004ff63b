use cred_core::{CoreError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Error, Debug)]
pub enum AuthError {
    // Caller-facing registration failures
    #[error("Missing field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Email is already in use {location}")]
    EmailInUse { location: ErrorLocation },

    #[error("Password exceeds {max_bytes} bytes {location}")]
    PasswordTooLong {
        max_bytes: usize,
        location: ErrorLocation,
    },

    // Internal failures
    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored password hash is malformed: {source} {location}")]
    MalformedHash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Storage failure: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    TokenSigning {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid configuration: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    // Token verification failures
    #[error("Token signature is invalid {location}")]
    SignatureInvalid { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::EmailInUse { .. } => "EMAIL_IN_USE",
            Self::PasswordTooLong { .. } => "PASSWORD_TOO_LONG",
            Self::Hashing { .. } => "HASHING_FAILURE",
            Self::MalformedHash { .. } => "MALFORMED_HASH",
            Self::Storage { .. } => "STORAGE_FAILURE",
            Self::TokenSigning { .. } => "TOKEN_SIGNING_FAILURE",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::SignatureInvalid { .. } => "SIGNATURE_INVALID",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
        }
    }

    /// True for failures caused by the caller's input rather than by the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::EmailInUse { .. }
                | Self::PasswordTooLong { .. }
                | Self::SignatureInvalid { .. }
                | Self::TokenExpired { .. }
                | Self::MalformedToken { .. }
        )
    }

    /// Message safe to return to a caller.
    ///
    /// `Display` carries operator detail (source errors, code locations); this
    /// never does. Internal variants all collapse to one generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField { .. } => "You must provide both email and password".to_string(),
            Self::EmailInUse { .. } => "Email is already in use".to_string(),
            Self::PasswordTooLong { max_bytes, .. } => {
                format!("Password must be at most {} bytes", max_bytes)
            }
            Self::SignatureInvalid { .. } => "Token signature is invalid".to_string(),
            Self::TokenExpired { .. } => "Token has expired".to_string(),
            Self::MalformedToken { .. } => "Token is malformed".to_string(),
            Self::Hashing { .. }
            | Self::MalformedHash { .. }
            | Self::Storage { .. }
            | Self::TokenSigning { .. }
            | Self::Configuration { .. } => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Offending input field, if the error is about one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } => Some(*field),
            Self::EmailInUse { .. } => Some("email"),
            Self::PasswordTooLong { .. } => Some("password"),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        match source {
            StoreError::DuplicateEmail { .. } => Self::EmailInUse {
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Backend { .. } => Self::Storage {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { field, .. } => Self::MissingField {
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
