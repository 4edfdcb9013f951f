/**
 * Current User Handler
 *
 * Implements GET /api/users/current. The identity comes straight from the
 * verified token claims; no store access is needed.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::CurrentUserResponse;
use crate::backend::middleware::auth::AuthUser;

/// Current-user handler
pub async fn current_user(AuthUser(user): AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        id: user.id.to_string(),
        name: user.name,
        avatar: user.avatar,
    })
}
