use std::fs;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;

/// Opens the SQLite pool described by `config`, creating the database file
/// (and its directory) when it does not exist yet.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::info!("Creating database directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        // An in-memory database lives only as long as its connection.
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .inspect_err(|err| log::error!("Failed to connect to {}: {err}", config.url))?;

    log::info!("Connected to database {}", config.url);
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    log::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .inspect_err(|err| log::error!("Failed to run migrations: {err}"))?;
    log::info!("Migrations completed");
    Ok(())
}

/// Fresh migrated in-memory database for unit tests.
#[cfg(test)]
pub(crate) async fn in_memory_pool() -> SqlitePool {
    let pool = connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        run_migrations: true,
    })
    .await
    .expect("in-memory database");
    migrate(&pool).await.expect("migrations");
    pool
}
