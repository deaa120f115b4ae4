//! Bearer token authentication
//!
//! - `token`: signing and verification of access tokens
//! - `middleware`: axum middleware guarding the protected routes

pub mod middleware;
pub mod token;

pub use middleware::auth_middleware;
pub use token::{hash_secret, issue_token, verify_token, Claims};
