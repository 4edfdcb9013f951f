//! Client Module
//!
//! The client-side session layer: Redux-style action descriptors reduced
//! into a single session state value, a persisted token store, and a thin
//! HTTP client over the REST API.
//!
//! # Data Flow
//!
//! The embedding application owns a `SessionState` and a `TokenStore`. API
//! calls go through `ApiClient`, which resolves every outcome (payloads and
//! server error maps alike) to an `Action`; the application feeds actions to
//! `reduce` and nothing else mutates the state. On startup,
//! `restore_session` reloads the persisted token and re-authenticates the
//! session if the token is still live.
//!
//! The token is decoded locally for display only; the server re-verifies it
//! on every private call.

/// Session state, actions, and the reducer
pub mod state;

/// Token persistence across restarts
pub mod token;

/// Client-side token decode and session restore
pub mod session;

/// HTTP client over the REST API
pub mod api;

// Re-export commonly used types
pub use api::{ApiClient, ClientError};
pub use session::{restore_session, SessionUser};
pub use state::{reduce, Action, SessionState};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
