//! User identity entity - the persisted result of a successful registration.

use crate::EmailAddress;

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// `password_hash` only ever holds output of the password hasher. The type is
/// deliberately not `Serialize`, and its `Debug` output hides the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Durable identifier; this, not the email, is the token subject.
    pub id: Uuid,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Create a new identity with a freshly generated id
    pub fn new(email: EmailAddress, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserIdentity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
