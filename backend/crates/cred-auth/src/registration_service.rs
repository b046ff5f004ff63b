//! Sign-up orchestration.
//!
//! ## Steps
//!
//! 1. Validate: email and password non-empty, email case-folded.
//! 2. Uniqueness pre-check against the store. This is only a fast path; two
//!    concurrent attempts for the same email can both pass it.
//! 3. Hash the password on a blocking worker thread.
//! 4. Persist. The store's unique constraint is the authoritative check, and
//!    a rejection there is reported exactly like a pre-check hit.
//! 5. Issue the token.
//!
//! The only durable effect is the single `create` in step 4. If the caller
//! goes away after it commits, the user record stays.
//!
//! Failures are returned, not logged; the caller decides how to report them.

use crate::{AuthError, PasswordHasher, Result as AuthErrorResult, TokenIssuer};

use cred_core::{Credentials, EmailAddress, StoreError, UserIdentity, UserStore};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};

pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    issuer: Arc<TokenIssuer>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, issuer: Arc<TokenIssuer>) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    /// Register a new identity and return a signed token for it
    pub async fn register(&self, credentials: Credentials) -> AuthErrorResult<String> {
        let Credentials { email, password } = credentials;

        // Validate
        let email = EmailAddress::parse(&email)?;
        if password.is_empty() {
            return Err(AuthError::MissingField {
                field: "password",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // CheckUniqueness (fast path only)
        let existing = self.store.find_by_email(&email).await?;
        if existing.is_some() {
            debug!("Registration rejected: email already registered");
            return Err(AuthError::EmailInUse {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // HashPassword
        let password_hash = self.hash_password(password).await?;

        // Persist
        let user = UserIdentity::new(email, password_hash);
        self.store.create(&user).await.map_err(|e| {
            if let StoreError::DuplicateEmail { .. } = e {
                warn!("Registration lost a race on a duplicate email; rejecting");
            }
            AuthError::from(e)
        })?;

        // IssueToken. The record stays even if this fails.
        let token = self
            .issuer
            .issue(user.id)
            .inspect_err(|_| warn!("User {} persisted without a token", user.id))?;

        info!("Registered user {}", user.id);

        Ok(token)
    }

    async fn hash_password(&self, password: String) -> AuthErrorResult<String> {
        let hasher = self.hasher;

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("hashing task did not complete: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }
}
