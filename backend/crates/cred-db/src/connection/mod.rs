use crate::{DbError, Result};

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Open a pool for a `sqlite:` connection string and bring the schema up to date.
///
/// The database file is created if missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !database_url.starts_with("sqlite:") {
        return Err(DbError::InvalidUrl {
            message: "expected a sqlite: connection string".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| DbError::InvalidUrl {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Migrations complete");

    Ok(())
}
