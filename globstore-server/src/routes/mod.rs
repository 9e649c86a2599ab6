//! HTTP route handlers and router configuration

mod admin;
mod globals;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the main application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let mut router = Router::new()
        // Health check
        .route("/health", get(admin::health))
        // Admin endpoints (read-only)
        .route("/globstore/stats", get(admin::stats))
        // Store operations
        .route("/globstore/set", post(globals::set))
        .route("/globstore/get", post(globals::get))
        .route("/globstore/kill", post(globals::kill))
        .route("/globstore/next", post(globals::next))
        .route("/globstore/children", post(globals::children))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
