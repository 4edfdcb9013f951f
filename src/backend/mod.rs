//! Backend Module
//!
//! All server-side code for the DevLink application: an Axum HTTP server
//! exposing the users/profile/posts REST API over a PostgreSQL store.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, pool lifecycle
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT sessions, avatar derivation
//! - **`profile`** - Profile documents and their handlers
//! - **`posts`** - Post documents (likes, comments) and their handlers
//! - **`validation`** - Pure per-resource input validators
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - The API error taxonomy and response conversion
//!
//! # Request Flow
//!
//! Every mutating handler follows the same sequence: validate the body,
//! look up the affected document, authorize the caller, mutate in memory,
//! persist, respond with JSON. Failures short-circuit with `?` into an
//! `ApiError`, which renders the field-keyed JSON bodies the API promises.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, JWT sessions, and user records
pub mod auth;

/// Profile documents and handlers
pub mod profile;

/// Post documents and handlers
pub mod posts;

/// Pure input validators
pub mod validation;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
