//! Users Endpoint Handlers
//!
//! HTTP handlers for the `/api/users` endpoints.

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Current-user handler
pub mod current;

pub use current::current_user;
pub use login::login;
pub use register::register;
