//! SQLite persistence for projects and tasks.
//!
//! Exposes pool construction, schema initialization, one-time seeding and
//! the repositories the HTTP layer reads from.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod bootstrap;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use bootstrap::{bootstrap, bootstrap_url};
pub use error::{StoreError, StoreResult};

pub type DbPool = sqlx::SqlitePool;

/// Embedded schema migrations from `crates/db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Parse a `sqlite://` connection string into connect options.
///
/// The database file is created if it does not exist yet.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true))
}

/// Upper bound on pooled connections to the SQLite file.
pub const MAX_CONNECTIONS: u32 = 5;

/// Create a connection pool for the given options.
pub async fn create_pool(options: SqliteConnectOptions) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the `projects` and `tasks` tables exist. Safe to call repeatedly.
pub async fn init_schema(pool: &DbPool) -> StoreResult<()> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Schema migrations applied");
    Ok(())
}
