use crate::error::Result as ServerErrorResult;

use cred_auth::{PasswordHasher, RegistrationService, TokenIssuer};
use cred_config::{AuthConfig, ConfigError};
use cred_db::UserRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub registration: Arc<RegistrationService>,
}

impl AppState {
    /// Wire the registration pipeline from validated auth config.
    ///
    /// The signing secret is read here once and lives inside the token issuer
    /// for the rest of the process.
    pub fn new(pool: SqlitePool, auth: &AuthConfig) -> ServerErrorResult<Self> {
        let secret = auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret must be set"))?;

        let issuer = Arc::new(
            TokenIssuer::with_hs256(secret.as_bytes(), auth.token_ttl())
                .with_leeway(auth.leeway_secs),
        );
        let hasher = PasswordHasher::new(auth.bcrypt_cost)?;
        let store = Arc::new(UserRepository::new(pool.clone()));

        Ok(Self {
            pool,
            registration: Arc::new(RegistrationService::new(store, hasher, issuer)),
        })
    }
}
