//! Admin endpoints: /health, /globstore/stats

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use globstore_core::wire::{HealthResponse, StatsResponse};
use std::sync::Arc;

/// Health check endpoint
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    tracing::debug!("health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Server statistics endpoint
///
/// GET /globstore/stats
///
/// Uptime, global count, and per-operation counters.
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    tracing::info!("server stats requested");
    let (global_count, globals) = state
        .store
        .with_read(|s| (s.global_count(), s.global_names()))
        .await;
    Json(StatsResponse {
        uptime_seconds: state.uptime_secs(),
        global_count,
        globals,
        sets: AppState::snapshot(&state.sets),
        gets: AppState::snapshot(&state.gets),
        kills: AppState::snapshot(&state.kills),
        cursor_reads: AppState::snapshot(&state.cursor_reads),
    })
}
