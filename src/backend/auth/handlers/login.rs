/**
 * Login Handler
 *
 * Implements POST /api/users/login.
 *
 * # Authentication Process
 *
 * 1. Validate the request body
 * 2. Look up the user by email
 * 3. Verify the password with bcrypt
 * 4. Issue a one-hour JWT embedding {id, name, avatar}
 *
 * The token is returned as `"Bearer <token>"`, ready to be echoed back in
 * the Authorization header.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::validation::validate_login;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - validation errors, or
///   `{"password": "Password incorrect"}`
/// * `404 Not Found` - `{"email": "User not found"}`
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let errors = validate_login(&request);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let user = get_user_by_email(&state.db, request.email.trim())
        .await?
        .ok_or_else(|| {
            tracing::warn!("login attempt for unknown email");
            ApiError::conflict(StatusCode::NOT_FOUND, "email", "User not found")
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("invalid password for user {}", user.id);
        return Err(ApiError::conflict(
            StatusCode::BAD_REQUEST,
            "password",
            "Password incorrect",
        ));
    }

    let token = create_token(&state.jwt_secret, user.id, &user.name, &user.avatar)?;

    tracing::info!("user {} logged in", user.id);

    Ok(Json(LoginResponse {
        success: true,
        token: format!("Bearer {}", token),
    }))
}
