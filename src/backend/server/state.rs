/**
 * Application State
 *
 * The process-wide resources handlers need: the connection pool, opened
 * once at boot, and the JWT signing secret. The router clones this into
 * every handler.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(db: PgPool, jwt_secret: impl Into<String>) -> Self {
        Self {
            db,
            jwt_secret: jwt_secret.into(),
        }
    }
}

/// Lets handlers that only touch the store extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
