//! # Blog API Server
//!
//! Route layer, configuration and bootstrap for the blog posts API.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
