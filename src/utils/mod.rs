//! Shared utilities.
//!
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: Bearer token creation and verification
//! - [`pagination`]: Page request/envelope primitives
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
