use crate::{EmailAddress, StoreResult, UserIdentity};

use async_trait::async_trait;

/// Persistent mapping from normalized email to user record.
///
/// Implementations must be safe for concurrent use and must enforce email
/// uniqueness at the storage layer: `create` returns
/// [`crate::StoreError::DuplicateEmail`] when a record with the same email
/// already exists, even if a preceding `find_by_email` returned `None`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &EmailAddress) -> StoreResult<Option<UserIdentity>>;

    async fn create(&self, user: &UserIdentity) -> StoreResult<()>;
}
