/**
 * Profile Endpoint Handlers
 *
 * HTTP handlers for the `/api/profile` endpoints: reads (own, by handle, by
 * user, all), the create-or-update upsert, the experience/education list
 * mutations, and account deletion.
 *
 * List mutations follow the document pattern throughout: load the caller's
 * profile, splice in memory, save the whole document. Nothing here guards
 * against concurrent writers; the last save wins.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::auth::users;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::validation::{validate_education, validate_experience, validate_profile};

use super::{db, EducationEntry, EducationInput, ExperienceEntry, ExperienceInput, Profile,
            ProfileInput, ProfileOwner};

fn no_profile_for_user() -> ApiError {
    ApiError::not_found("noprofile", "There is no profile for this user")
}

/// GET /api/profile - the caller's own profile
pub async fn own_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Profile>, ApiError> {
    let profile = db::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(no_profile_for_user)?;

    Ok(Json(profile))
}

/// GET /api/profile/handle/{handle}
///
/// The 404 body is keyed `handle`, unlike the own-profile route's
/// `noprofile`; each route keeps its inherited error shape.
pub async fn profile_by_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = db::find_by_handle(&state.db, &handle)
        .await?
        .ok_or_else(|| {
            ApiError::not_found("handle", "There is no profile for this handle")
        })?;

    Ok(Json(profile))
}

/// GET /api/profile/user/{user_id}
///
/// The 404 body is keyed `profile`, this route's inherited error shape.
pub async fn profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let not_found = || ApiError::not_found("profile", "There is no profile for this user");

    // An unparseable id gets the same 404 a missing profile does
    let user_id = Uuid::parse_str(&user_id).map_err(|_| not_found())?;

    let profile = db::find_by_user(&state.db, user_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(profile))
}

/// GET /api/profile/all
pub async fn all_profiles(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, ApiError> {
    let profiles = db::find_all(&state.db).await?;

    Ok(Json(profiles))
}

/// POST /api/profile - create or partially update the caller's profile
///
/// # Errors
///
/// * `400 Bad Request` - validation errors, or
///   `{"handle": "The handle already exists"}` when creating with a handle
///   another profile holds
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<ProfileInput>,
) -> Result<Json<Profile>, ApiError> {
    let errors = validate_profile(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    match db::find_by_user(&state.db, user.id).await? {
        Some(mut profile) => {
            profile.apply(&input);
            db::save_profile(&state.db, &profile).await?;
            Ok(Json(profile))
        }
        None => {
            if db::find_by_handle(&state.db, input.handle.trim())
                .await?
                .is_some()
            {
                return Err(ApiError::conflict(
                    StatusCode::BAD_REQUEST,
                    "handle",
                    "The handle already exists",
                ));
            }

            let owner = ProfileOwner {
                id: user.id,
                name: user.name,
                avatar: user.avatar,
            };
            let profile = Profile::create(owner, &input);
            db::insert_profile(&state.db, &profile).await?;

            tracing::info!("created profile {} for user {}", profile.handle, profile.user.id);

            Ok(Json(profile))
        }
    }
}

/// POST /api/profile/experience - prepend an experience entry
pub async fn add_experience(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<ExperienceInput>,
) -> Result<Json<Profile>, ApiError> {
    let errors = validate_experience(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let mut profile = db::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(no_profile_for_user)?;

    profile.add_experience(ExperienceEntry::new(&input));
    db::save_profile(&state.db, &profile).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile/experience/{exp_id} - remove an entry by id
///
/// An unknown id leaves the list untouched, but the profile is still saved
/// as-is and returned.
pub async fn remove_experience(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = db::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(no_profile_for_user)?;

    if let Ok(entry_id) = Uuid::parse_str(&exp_id) {
        profile.remove_experience(entry_id);
    }
    db::save_profile(&state.db, &profile).await?;

    Ok(Json(profile))
}

/// POST /api/profile/education - prepend an education entry
pub async fn add_education(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<EducationInput>,
) -> Result<Json<Profile>, ApiError> {
    let errors = validate_education(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let mut profile = db::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(no_profile_for_user)?;

    profile.add_education(EducationEntry::new(&input));
    db::save_profile(&state.db, &profile).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile/education/{edu_id} - remove an entry by id
pub async fn remove_education(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = db::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(no_profile_for_user)?;

    if let Ok(entry_id) = Uuid::parse_str(&edu_id) {
        profile.remove_education(entry_id);
    }
    db::save_profile(&state.db, &profile).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile - delete the caller's profile, then the account
///
/// Profile first, user second; there is no rollback if the second delete
/// fails. Posts are left orphaned on purpose.
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Value>, ApiError> {
    db::delete_by_user(&state.db, user.id).await?;
    users::delete_user(&state.db, user.id).await?;

    tracing::info!("deleted account {}", user.id);

    Ok(Json(json!({ "success": true })))
}
