//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::database::DatabaseConfig;
use blog_infra::memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use blog_infra::database::{Database, PostgresPostRepository};

/// Which store backs the post repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub storage: StorageKind,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<Database>>,
}

impl AppState {
    /// State over an in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), StorageKind::Memory)
    }

    /// State over an already-built repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>, storage: StorageKind) -> Self {
        Self {
            posts,
            storage,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Build the application state from configuration.
    ///
    /// A configured database must be reachable; there is no fallback once a URL is given.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => {
                let database = Database::init(config)
                    .await
                    .map_err(|e| RepoError::Connection(e.to_string()))?;
                let repo = Arc::new(PostgresPostRepository::new(database.conn.clone()));

                Self {
                    posts: repo,
                    storage: StorageKind::Postgres,
                    db: Some(Arc::new(database)),
                }
            }
            None => {
                tracing::warn!("No database URL set. Running with the in-memory store.");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("Database URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory store");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage.as_str(), "Application state initialized");
        Ok(state)
    }

    /// Check that the backing store is reachable.
    pub async fn ping(&self) -> Result<(), RepoError> {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            db.ping()
                .await
                .map_err(|e| RepoError::Connection(e.to_string()))?;
        }
        Ok(())
    }

    /// Release the database pool once no handler holds a reference to it.
    pub async fn shutdown(self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = self.db {
            match Arc::try_unwrap(db) {
                Ok(database) => {
                    if let Err(e) = database.close().await {
                        tracing::warn!("Failed to close database pool: {}", e);
                    }
                }
                Err(_) => tracing::debug!("Database pool still shared; dropping reference"),
            }
        }
    }
}
