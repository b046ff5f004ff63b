//! User repository - SQLite implementation of [`UserStore`].
//!
//! Uniqueness of `email` is enforced by `idx_users_email`. An insert that
//! violates it surfaces as [`StoreError::DuplicateEmail`], which callers treat
//! as the authoritative "email in use" signal.

use crate::{DbError, Result as DbErrorResult};

use cred_core::{EmailAddress, StoreError, StoreResult, UserIdentity, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user: &UserIdentity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &EmailAddress) -> DbErrorResult<Option<UserIdentity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::user_from_row(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserIdentity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::user_from_row(&r)).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn user_from_row(r: &SqliteRow) -> DbErrorResult<UserIdentity> {
        let id: String = r.try_get("id")?;
        let email: String = r.try_get("email")?;
        let password_hash: String = r.try_get("password_hash")?;
        let created_at: i64 = r.try_get("created_at")?;

        Ok(UserIdentity {
            id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: EmailAddress::parse(&email).map_err(|e| DbError::Decode {
                message: format!("Invalid users.email: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            password_hash,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Decode {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> StoreResult<Option<UserIdentity>> {
        UserRepository::find_by_email(self, email)
            .await
            .map_err(StoreError::from)
    }

    async fn create(&self, user: &UserIdentity) -> StoreResult<()> {
        self.insert(user).await.map_err(StoreError::from)
    }
}
