use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Type alias for the SQLite connection pool
pub type DbPool = SqlitePool;

/// Creates and configures a SQLite connection pool
///
/// # Arguments
/// * `database_url` - SQLite connection string, e.g. `sqlite://tasks.db?mode=rwc`
/// * `max_connections` - Upper bound on pooled connections
///
/// Foreign key enforcement is switched on for every connection so that
/// `tasks.owner_id` always references an existing user.
///
/// # Example
/// ```ignore
/// let pool = create_pool("sqlite://tasks.db?mode=rwc", 5).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!("Creating database connection pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Creates a pool over a private in-memory database
///
/// A single connection that never expires is kept, since every new SQLite
/// in-memory connection would otherwise see an empty database.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Applies the schema migrations in `./migrations`
///
/// Safe to call on every startup: already-applied migrations are skipped.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations completed successfully");
    Ok(())
}
