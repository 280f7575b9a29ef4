/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * API routes, request tracing, and the 404 fallback into a single Axum
 * router.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
///
/// # Arguments
///
/// * `app_state` - Application state shared by all handlers
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(configure_api_routes(&app_state))
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}
