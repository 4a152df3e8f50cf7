//! # Blog Infrastructure
//!
//! Concrete implementations of the [`PostRepository`](blog_core::ports::PostRepository) port.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - without `postgres` - in-memory store only (`--no-default-features`)

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{Database, PostgresPostRepository};
