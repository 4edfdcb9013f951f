//! Authentication Module
//!
//! Registration, login, and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── avatar.rs       - Gravatar URL derivation
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - POST /api/users/register
//!     ├── login.rs    - POST /api/users/login
//!     └── current.rs  - GET /api/users/current
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name/email/password validated → avatar derived from the
//!    email → password hashed with bcrypt → user stored
//! 2. **Login**: credentials verified → signed JWT embedding
//!    `{id, name, avatar}` returned as `"Bearer <token>"`
//! 3. **Private routes**: the middleware verifies the token on every call
//!    and hands the embedded identity to the handler

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Gravatar URL derivation
pub mod avatar;

/// HTTP handlers for the users endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest};
pub use handlers::{current_user, login, register};
