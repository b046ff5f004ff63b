pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result, StoreError, StoreResult};
pub use models::credentials::Credentials;
pub use models::email_address::EmailAddress;
pub use models::user_identity::UserIdentity;
pub use store::user_store::UserStore;

#[cfg(test)]
mod tests;
