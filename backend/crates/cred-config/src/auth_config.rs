use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, DEFAULT_LEEWAY_SECS, MAX_BCRYPT_COST,
    MAX_TOKEN_TTL_SECS, MIN_BCRYPT_COST, MIN_JWT_SECRET_LENGTH,
};

use std::fmt;

use chrono::Duration;
use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; never logged.
    pub jwt_secret: Option<String>,
    /// Token lifetime; tokens never expire when unset
    pub token_ttl_secs: Option<u64>,
    /// Clock skew tolerance applied to `exp`
    pub leeway_secs: u64,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: None,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth("auth.jwt_secret must be set"));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs == Some(0) {
            return Err(ConfigError::auth(
                "auth.token_ttl_secs must be greater than 0 when set",
            ));
        }

        if let Some(secs) = self.token_ttl_secs
            && secs > MAX_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be at most {}, got {}",
                MAX_TOKEN_TTL_SECS, secs
            )));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }

    /// Token lifetime as a duration. `None` when unset or not representable;
    /// `validate` rejects the latter.
    pub fn token_ttl(&self) -> Option<Duration> {
        self.token_ttl_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(Duration::try_seconds)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "jwt_secret",
                &self.jwt_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
