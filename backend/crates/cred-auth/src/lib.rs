pub mod claims;
pub mod error;
pub mod password_hasher;
pub mod registration_service;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
pub use registration_service::RegistrationService;
pub use token_issuer::TokenIssuer;

#[cfg(test)]
mod tests;
