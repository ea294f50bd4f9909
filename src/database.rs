use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::{config::DatabaseConfig, error::Result};

/// Database connection pool type
pub type DbPool = sqlx::SqlitePool;

/// Database connection type - supports both pool connections and transactions
/// Use `conn.as_mut()` for pool connections, `tx.as_mut()` for transactions
pub type DbConn = sqlx::SqliteConnection;

/// Connects to the database described by the configuration.
///
/// The connection is established eagerly so that an unreachable store is
/// detected at startup rather than on the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<DbPool> {
    // WAL plus a busy timeout keeps concurrent request handling from
    // tripping over SQLite's single-writer lock.
    let options = SqliteConnectOptions::from_str(&config.connection_string())?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Ensures the schema exists. Idempotent, runs at startup.
///
/// The UNIQUE constraint on `email` is what closes the check-then-insert
/// race between concurrent registrations for the same address.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
