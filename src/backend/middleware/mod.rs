//! Middleware Module
//!
//! Request-processing middleware for the backend server.

/// Bearer-token authentication
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
