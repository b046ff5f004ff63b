use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claim set carried by issued tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, never the email)
    pub sub: String,
    /// Issued at timestamp (Unix seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix seconds), present only when a TTL is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Unique token id
    pub jti: String,
}

impl Claims {
    /// Validate claims after signature verification.
    ///
    /// The subject is checked when it is parsed as an id.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if let Some(exp) = self.exp
            && exp < self.iat
        {
            return Err(AuthError::MalformedToken {
                message: "exp is earlier than iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
