//! # Blog Shared
//!
//! Wire types for the blog posts API: request bodies, the post representation,
//! and the error body returned on failure.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
