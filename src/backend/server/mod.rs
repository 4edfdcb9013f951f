//! Server Module
//!
//! Configuration, shared state, and initialization for the HTTP server.
//!
//! # Lifecycle
//!
//! `main` loads configuration (failing fast when required variables are
//! missing), opens the connection pool once, builds the router around
//! `AppState`, serves until shutdown, and closes the pool afterwards.
//! Handlers never reach for ambient globals; everything they need arrives
//! through the state.

/// Application state
pub mod state;

/// Environment-driven configuration and pool lifecycle
pub mod config;

/// Router assembly
pub mod init;

// Re-export commonly used types
pub use config::Config;
pub use init::create_app;
pub use state::AppState;
