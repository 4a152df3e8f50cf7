//! In-memory store - used when no database is configured and by the HTTP tests.

mod post;

pub use post::InMemoryPostRepository;
