/**
 * Router Configuration
 *
 * Assembles the application router: the root greeting, the public and
 * private API tables, the static file service, and the 404 fallback.
 *
 * # Route Order
 *
 * 1. Root greeting
 * 2. Public API routes (no token required)
 * 3. Private API routes (behind the bearer-token middleware)
 * 4. Static files under `/static`
 * 5. Fallback handler for unknown paths
 */

use axum::{http::StatusCode, routing::get, Router};
use tower_http::services::ServeDir;

use crate::backend::routes::api_routes::{private_routes, public_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "DevLink API running" }))
        .merge(public_routes())
        .merge(private_routes(state.clone()))
        .nest_service("/static", ServeDir::new("public"))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
