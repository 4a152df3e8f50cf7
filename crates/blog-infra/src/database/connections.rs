#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Pooled connection to the posts database.
///
/// The pool must be established before the server accepts requests.
#[cfg(feature = "postgres")]
pub struct Database {
    pub conn: DbConn,
}

#[cfg(feature = "postgres")]
impl Database {
    /// Open the connection pool from configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = sea_orm::Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { conn })
    }

    /// Check that the database is reachable.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.conn.close().await
    }
}
