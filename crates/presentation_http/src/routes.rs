//! Route definitions

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Map page
        .route("/", get(handlers::index::index))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Reference data
        .route("/v1/destinations", get(handlers::destinations::list_destinations))
        // Map API (v1)
        .route("/v1/map", get(handlers::map::get_map))
        .route("/v1/map/click", post(handlers::map::click))
        // Session API (v1)
        .route("/v1/session", get(handlers::session::get_session))
        .route("/v1/session/selection", put(handlers::session::update_selection))
        // Attach state
        .with_state(state)
}
