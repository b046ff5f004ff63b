
use cred_core::{EmailAddress, StoreError, StoreResult, UserIdentity, UserStore};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Cheapest bcrypt cost, keeps tests fast
pub(crate) const TEST_COST: u32 = 4;

/// In-memory store with a unique email index.
///
/// `hide_existing` makes lookups miss so tests can reach the constraint path the
/// way a concurrent registration would. `fail_writes` simulates a backend outage.
#[derive(Default)]
pub(crate) struct InMemoryUserStore {
    users: Mutex<HashMap<EmailAddress, UserIdentity>>,
    pub(crate) hide_existing: bool,
    pub(crate) fail_writes: bool,
    pub(crate) create_calls: AtomicUsize,
}

impl InMemoryUserStore {
    pub(crate) fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn get(&self, email: &str) -> Option<UserIdentity> {
        let email = EmailAddress::parse(email).unwrap();
        self.users.lock().unwrap().get(&email).cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &EmailAddress) -> StoreResult<Option<UserIdentity>> {
        if self.hide_existing {
            return Ok(None);
        }
        Ok(self.users.lock().unwrap().get(email).cloned())
    }

    async fn create(&self, user: &UserIdentity) -> StoreResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_writes {
            return Err(StoreError::Backend {
                message: "disk I/O error: /var/lib/users.db".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }
}
