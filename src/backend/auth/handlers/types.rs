/**
 * Users Handler Types
 *
 * Request and response types for the registration, login, and current-user
 * handlers. Missing request fields deserialize to empty strings so the
 * validators can report them as required rather than the request failing to
 * parse.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Raw password; hashed before storage, never logged
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
///
/// The token is returned ready for the Authorization header, prefixed with
/// `"Bearer "`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Identity echoed back to an authenticated caller
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub avatar: String,
}
