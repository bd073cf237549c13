//! Application configuration, loaded from environment variables.
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: signing key and token lifetime
//! - [`pagination`]: default paging parameters for listing endpoints

pub mod cors;
pub mod database;
pub mod jwt;
pub mod pagination;
