use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn};

use social_core::error::RepoError;

/// Configuration for the database pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Build the process-wide database pool from configuration.
///
/// Called once before the server starts accepting connections; every
/// request checks a connection out of this pool for the duration of each
/// query and returns it on every exit path.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, RepoError> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts)
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;

    tracing::info!("Database connected (pool: {})", config.max_connections);

    Ok(db)
}
