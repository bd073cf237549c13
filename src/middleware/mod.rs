//! Request middleware and extractors.
//!
//! - [`auth`]: bearer token authentication; resolves the caller's
//!   identity and role for handlers that need them

pub mod auth;
