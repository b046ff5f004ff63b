//! One-way salted password hashing.
//!
//! Records use the bcrypt modular crypt format (`$2b$<cost>$<salt+hash>`),
//! which embeds both the cost and the salt. Raising the cost therefore only
//! affects new records; existing ones keep verifying against their own cost.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Bcrypt input limit. Longer passwords would be silently truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub const DEFAULT_COST: u32 = 10;
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    #[track_caller]
    pub fn new(cost: u32) -> AuthErrorResult<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AuthError::Configuration {
                message: format!(
                    "bcrypt cost must be between {} and {}, got {}",
                    MIN_COST, MAX_COST, cost
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` under a fresh random salt
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::PasswordTooLong {
                max_bytes: MAX_PASSWORD_BYTES,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        bcrypt::hash(plaintext, self.cost).map_err(|e| AuthError::Hashing {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check `plaintext` against a record produced by [`PasswordHasher::hash`].
    ///
    /// The digest comparison is constant-time. A record that is not a valid
    /// bcrypt string is an error, never a plain `false`.
    #[track_caller]
    pub fn verify(&self, plaintext: &str, hashed_record: &str) -> AuthErrorResult<bool> {
        // Such a password could never have been hashed here; bcrypt would only
        // compare its first 72 bytes.
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        bcrypt::verify(plaintext, hashed_record).map_err(|e| AuthError::MalformedHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}
