//! Case-folded email address.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;

/// An email address normalized to lowercase.
///
/// Two addresses differing only by case are the same identity, so every
/// comparison, lookup and insert goes through this type rather than a raw `String`.
/// No format validation is applied beyond non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        if raw.is_empty() {
            return Err(CoreError::Validation {
                field: "email",
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
