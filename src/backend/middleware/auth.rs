/**
 * Authentication Middleware
 *
 * Protects private routes. The middleware pulls the JWT out of the
 * Authorization header, verifies signature and expiry against the
 * configured secret, and attaches the embedded identity to the request;
 * handlers receive it through the `AuthUser` extractor. Every route behind
 * the middleware is private; everything else is public.
 *
 * Verification is pure: no store lookup, no side effects.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated identity extracted from the JWT claims
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Authentication middleware for the private route table
///
/// 1. Reads the Authorization header
/// 2. Strips the `"Bearer "` prefix
/// 3. Verifies signature and expiry
/// 4. Attaches the embedded identity to request extensions
///
/// Rejects with 401 Unauthorized when the token is missing, malformed,
/// expired, or carries a bad signature.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::Unauthorized
    })?;

    let claims = verify_token(&state.jwt_secret, token).map_err(|e| {
        tracing::warn!("token rejected: {:?}", e);
        ApiError::Unauthorized
    })?;

    let id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("invalid user id in token: {:?}", e);
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id,
        name: claims.name,
        avatar: claims.avatar,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the identity the middleware attached
///
/// Only routes behind `auth_middleware` can extract this; anywhere else it
/// rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;
    use sqlx::postgres::PgPoolOptions;

    fn state() -> AppState {
        // Lazy pool: never actually connects in these tests
        let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/unused");
        AppState::new(pool.expect("lazy pool"), "test-secret")
    }

    #[tokio::test]
    async fn test_extractor_yields_attached_identity() {
        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            avatar: "https://avatar".to_string(),
        };

        let request = Request::builder().uri("/api/profile").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(user.clone());

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &state())
            .await
            .unwrap();
        assert_eq!(extracted.id, user.id);
        assert_eq!(extracted.name, user.name);
    }

    #[tokio::test]
    async fn test_extractor_rejects_without_middleware() {
        let request = Request::builder().uri("/api/profile").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
