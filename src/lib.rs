//! DevLink - Main Library
//!
//! DevLink is a social-profile web application: user registration and login
//! with JWT bearer sessions, developer profiles (experience, education,
//! social links), and posts with likes and comments.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`backend`** - The Axum HTTP server
//!   - REST handlers for users, profiles, and posts
//!   - JWT session issuance and verification
//!   - PostgreSQL persistence via sqlx, used document-style (embedded lists
//!     in JSONB columns, whole-document read-modify-write)
//!
//! - **`client`** - The client-side session layer
//!   - Action descriptors consumed by a single state reducer
//!   - Token persistence across restarts
//!   - A thin reqwest API client mirroring the server endpoints

/// Backend server-side code
pub mod backend;

/// Client-side session state, actions, and API wrappers
pub mod client;
