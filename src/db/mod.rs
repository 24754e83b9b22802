//! Database access layer
//!
//! One `SqlitePool` per process, handed to every query function by reference.
//! The pool checks a connection out per statement and returns it on drop, so
//! concurrent requests never share a live connection. Every write commits
//! immediately; there are no multi-statement transactions.

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod employees;
pub mod surveys;
pub mod tasks;
pub mod users;

/// Open the store and apply the schema.
///
/// Creates the database file if missing; a path that cannot be created or
/// opened fails here, at startup, rather than on first query.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options: SqliteConnectOptions = database_url.parse()?;
    let options = options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        // sqlx enables PRAGMA foreign_keys by default; the schema declares
        // FKs but intentionally does not enforce them (see migrations).
        .foreign_keys(false)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let options: SqliteConnectOptions = "sqlite::memory:".parse().expect("options");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options.foreign_keys(false))
        .await
        .expect("in-memory pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}
