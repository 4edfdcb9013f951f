/**
 * Registration Handler
 *
 * Implements POST /api/users/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email, and password
 * 2. Reject duplicate emails
 * 3. Derive the Gravatar URL from the email
 * 4. Hash the password with bcrypt
 * 5. Store and return the new user (without the password hash)
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::avatar::gravatar_url;
use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::users::{self, User};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::validation::validate_register;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - field-keyed validation errors
/// * `404 Not Found` - `{"email": "Email already exists"}` (the original
///   API's status for a duplicate email, preserved)
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<User>, ApiError> {
    let errors = validate_register(&request);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let email = request.email.trim();
    if users::get_user_by_email(&state.db, email).await?.is_some() {
        tracing::warn!("registration rejected, email already exists");
        return Err(ApiError::conflict(
            StatusCode::NOT_FOUND,
            "email",
            "Email already exists",
        ));
    }

    let avatar = gravatar_url(email);
    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = users::create_user(
        &state.db,
        request.name.trim(),
        email,
        &avatar,
        &password_hash,
    )
    .await?;

    tracing::info!("registered user {}", user.id);

    Ok(Json(user))
}
