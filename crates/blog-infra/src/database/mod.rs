//! Database connection management and the SeaORM post store.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::Database;
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;
