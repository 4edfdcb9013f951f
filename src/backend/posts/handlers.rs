/**
 * Posts Endpoint Handlers
 *
 * HTTP handlers for the `/api/posts` endpoints: the public feed, post
 * creation/deletion, likes, and comments.
 *
 * Deletion is the only owner-guarded mutation. Comment removal carries no
 * ownership check: any authenticated caller may remove any comment. That is
 * the inherited behavior and the API tests pin it.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::validation::{validate_comment, validate_post};

use super::{db, Comment, Post, PostInput};

fn post_not_found() -> ApiError {
    ApiError::not_found("postnotfound", "No post found with that ID")
}

/// Unparseable ids get the same 404 a missing post does
fn parse_post_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| post_not_found())
}

/// GET /api/posts - all posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = db::find_all(&state.db).await?;

    Ok(Json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_post_id(&id)?;
    let post = db::find_by_id(&state.db, id)
        .await?
        .ok_or_else(post_not_found)?;

    Ok(Json(post))
}

/// POST /api/posts - create a post owned by the caller
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, ApiError> {
    let errors = validate_post(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let post = Post::new(user.id, &input);
    db::insert_post(&state.db, &post).await?;

    tracing::info!("user {} created post {}", user.id, post.id);

    Ok(Json(post))
}

/// DELETE /api/posts/{id} - owner-only
///
/// # Errors
///
/// * `404 Not Found` - no such post
/// * `403 Forbidden` - `{"notauthorized": "User not authorized"}` when the
///   caller does not own the post
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_post_id(&id)?;
    let post = db::find_by_id(&state.db, id)
        .await?
        .ok_or_else(post_not_found)?;

    if post.user_id != user.id {
        tracing::warn!("user {} tried to delete post {} they do not own", user.id, id);
        return Err(ApiError::forbidden("User not authorized"));
    }

    db::delete_post(&state.db, id).await?;

    Ok(Json(json!({ "success": true })))
}

/// POST /api/posts/like/{id} - like once per user
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_post_id(&id)?;
    let mut post = db::find_by_id(&state.db, id)
        .await?
        .ok_or_else(post_not_found)?;

    if post.liked_by(user.id) {
        return Err(ApiError::conflict(
            StatusCode::BAD_REQUEST,
            "alreadyliked",
            "User already liked this post",
        ));
    }

    post.add_like(user.id);
    db::save_post(&state.db, &post).await?;

    Ok(Json(post))
}

/// POST /api/posts/unlike/{id}
pub async fn unlike_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_post_id(&id)?;
    let mut post = db::find_by_id(&state.db, id)
        .await?
        .ok_or_else(post_not_found)?;

    if !post.liked_by(user.id) {
        return Err(ApiError::conflict(
            StatusCode::BAD_REQUEST,
            "notliked",
            "You have not yet liked this post",
        ));
    }

    post.remove_like(user.id);
    db::save_post(&state.db, &post).await?;

    Ok(Json(post))
}

/// POST /api/posts/comment/{id} - prepend a comment
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, ApiError> {
    let errors = validate_comment(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let id = parse_post_id(&id)?;
    let mut post = db::find_by_id(&state.db, id)
        .await?
        .ok_or_else(post_not_found)?;

    post.add_comment(Comment::new(user.id, &input));
    db::save_post(&state.db, &post).await?;

    Ok(Json(post))
}

/// DELETE /api/posts/comment/{id}/{comment_id} - remove a comment by id
///
/// No ownership check: any authenticated caller may remove any comment
/// (inherited behavior, pinned by the API tests).
pub async fn remove_comment(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_post_id(&id)?;
    let mut post = db::find_by_id(&state.db, id)
        .await?
        .ok_or_else(post_not_found)?;

    let comment_id = Uuid::parse_str(&comment_id)
        .ok()
        .filter(|cid| post.has_comment(*cid))
        .ok_or_else(|| ApiError::not_found("commentnotexists", "Comment does not exist"))?;

    post.remove_comment(comment_id);
    db::save_post(&state.db, &post).await?;

    Ok(Json(post))
}
