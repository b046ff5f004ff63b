//! Stateless bearer tokens (HS256 JWT).
//!
//! ## Verification order
//!
//! 1. Signature. A mismatch is rejected before any claim is looked at.
//! 2. Claim consistency (`exp` not before `iat`).
//! 3. Expiry, if the token carries `exp`.
//! 4. Subject extraction. Anything but a UUID, including an empty `sub`, is malformed.
//!
//! Expiry is checked here rather than by jsonwebtoken so that `verify_at` is a
//! pure function of the token, the secret and the supplied clock.

use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Default clock skew tolerance
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
    leeway_secs: u64,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl: Option<Duration>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, subject: Uuid) -> AuthErrorResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Sign a token for `subject` as if issued at `issued_at`
    #[track_caller]
    pub fn issue_at(&self, subject: Uuid, issued_at: DateTime<Utc>) -> AuthErrorResult<String> {
        let exp = match self.ttl {
            Some(ttl) => Some(
                issued_at
                    .checked_add_signed(ttl)
                    .ok_or_else(|| AuthError::Configuration {
                        message: format!("token ttl {} overflows the expiry timestamp", ttl),
                        location: ErrorLocation::from(Location::caller()),
                    })?
                    .timestamp(),
            ),
            None => None,
        };

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenSigning {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.verify_at(token, Utc::now())
    }

    /// Verify `token` against the clock value `now` and return its subject
    #[track_caller]
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Uuid> {
        let claims = self.decode_claims(token)?;
        claims.validate()?;

        if let Some(exp) = claims.exp {
            let leeway = i64::try_from(self.leeway_secs).unwrap_or(i64::MAX);
            if now.timestamp() > exp.saturating_add(leeway) {
                return Err(AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Uuid::parse_str(&claims.sub).map_err(|e| AuthError::MalformedToken {
            message: format!("sub is not a valid id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Signature check and claim decoding
    #[track_caller]
    fn decode_claims(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::SignatureInvalid {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &"HS256")
            .field("ttl", &self.ttl)
            .field("leeway_secs", &self.leeway_secs)
            .finish_non_exhaustive()
    }
}
