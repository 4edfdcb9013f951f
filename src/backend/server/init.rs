/**
 * Server Initialization
 *
 * Assembles the application from its parts. Configuration has already
 * produced the pool; this wraps it in the shared state and maps the API
 * surface onto the handlers.
 */

use axum::Router;

use crate::backend::routes::create_router;
use crate::backend::server::state::AppState;

/// Build the application router around the shared state
///
/// The tests build their app the same way, around a disposable pool.
pub fn create_app(state: AppState) -> Router {
    tracing::info!("initializing the DevLink API");

    create_router(state)
}
