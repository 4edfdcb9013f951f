/**
 * API Route Tables
 *
 * Route registration for the users, profile, and posts resources, split
 * into the public table and the private table. Private routes sit behind
 * the bearer-token middleware; handlers on them receive the verified
 * identity through the `AuthUser` extractor.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/users/register` - registration
 * - `POST /api/users/login` - login, returns the bearer token
 * - `GET /api/profile/all` - all profiles
 * - `GET /api/profile/handle/{handle}` - profile by handle
 * - `GET /api/profile/user/{user_id}` - profile by user id
 * - `GET /api/posts` - the feed, newest first
 * - `GET /api/posts/{id}` - a single post
 * - `GET /api/{users,profile,posts}/test` - liveness probes
 *
 * ## Private (Authorization: Bearer <token>)
 * - `GET /api/users/current` - the caller's identity
 * - `GET|POST|DELETE /api/profile` - own profile read/upsert/account delete
 * - `POST /api/profile/{experience,education}` + DELETE by entry id
 * - `POST /api/posts`, `DELETE /api/posts/{id}`
 * - `POST /api/posts/{like,unlike}/{id}`
 * - `POST /api/posts/comment/{id}`, `DELETE /api/posts/comment/{id}/{comment_id}`
 */

use axum::{
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::backend::auth::handlers::{current_user, login, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::posts;
use crate::backend::profile;
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/test", get(|| async { Json(json!({ "msg": "Users works" })) }))
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/profile/test", get(|| async { Json(json!({ "msg": "Profile works" })) }))
        .route("/api/profile/all", get(profile::all_profiles))
        .route("/api/profile/handle/{handle}", get(profile::profile_by_handle))
        .route("/api/profile/user/{user_id}", get(profile::profile_by_user))
        .route("/api/posts/test", get(|| async { Json(json!({ "msg": "Posts works" })) }))
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/{id}", get(posts::get_post))
}

/// Routes behind the bearer-token middleware
pub fn private_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/users/current", get(current_user))
        .route(
            "/api/profile",
            get(profile::own_profile)
                .post(profile::upsert_profile)
                .delete(profile::delete_account),
        )
        .route("/api/profile/experience", post(profile::add_experience))
        .route(
            "/api/profile/experience/{exp_id}",
            delete(profile::remove_experience),
        )
        .route("/api/profile/education", post(profile::add_education))
        .route(
            "/api/profile/education/{edu_id}",
            delete(profile::remove_education),
        )
        .route("/api/posts", post(posts::create_post))
        .route("/api/posts/{id}", delete(posts::delete_post))
        .route("/api/posts/like/{id}", post(posts::like_post))
        .route("/api/posts/unlike/{id}", post(posts::unlike_post))
        .route("/api/posts/comment/{id}", post(posts::add_comment))
        .route(
            "/api/posts/comment/{id}/{comment_id}",
            delete(posts::remove_comment),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
