use cred_core::{EmailAddress, UserIdentity};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    cred_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Builds a user with a placeholder hash; nothing here checks the hash format
pub fn create_test_user(email: &str) -> UserIdentity {
    UserIdentity::new(
        EmailAddress::parse(email).unwrap(),
        "$2b$04$placeholderplaceholderplaceholderplaceholderplace".to_string(),
    )
}
