//! Store operation endpoints: set, get, kill, next, children

use crate::error::Result;
use crate::state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use globstore_core::wire::{
    ChildrenRequest, GetRequest, GetResponse, KillRequest, KillResponse, NextRequest,
    NextResponse, SetRequest, SetResponse, DEFAULT_PAGE_LIMIT, NAMESPACE_HEADER,
};
use globstore_core::{ChildPage, Store};
use std::sync::Arc;

fn log_namespace(headers: &HeaderMap) {
    if let Some(ns) = headers.get(NAMESPACE_HEADER).and_then(|v| v.to_str().ok()) {
        tracing::debug!(namespace = %ns, "client namespace");
    }
}

/// POST /globstore/set
pub async fn set(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    log_namespace(&headers);
    state.store.set(&req.global, &req.path, req.value).await?;
    AppState::count(&state.sets);
    tracing::debug!(global = %req.global, depth = req.path.len(), "set");
    Ok(Json(SetResponse { set: true }))
}

/// POST /globstore/get
pub async fn get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<GetRequest>,
) -> Result<Json<GetResponse>> {
    log_namespace(&headers);
    let value = state.store.get(&req.global, &req.path).await?;
    AppState::count(&state.gets);
    Ok(Json(GetResponse::from_value(value)))
}

/// POST /globstore/kill
pub async fn kill(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<KillRequest>,
) -> Result<Json<KillResponse>> {
    log_namespace(&headers);
    state.store.kill(&req.global, &req.path).await?;
    AppState::count(&state.kills);
    tracing::debug!(global = %req.global, depth = req.path.len(), "kill");
    Ok(Json(KillResponse { killed: true }))
}

/// POST /globstore/next
///
/// Single cursor step: first direct child of the prefix strictly after
/// `after`, or `{"done":true}` when exhausted.
pub async fn next(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<NextRequest>,
) -> Result<Json<NextResponse>> {
    log_namespace(&headers);
    let entry = state
        .store
        .next_after(&req.global, &req.prefix, req.after.as_ref())
        .await?;
    AppState::count(&state.cursor_reads);
    Ok(Json(match entry {
        Some(entry) => NextResponse::entry(entry),
        None => NextResponse::done(),
    }))
}

/// POST /globstore/children
///
/// Bounded batch of direct children; resumable by the last entry's key.
pub async fn children(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ChildrenRequest>,
) -> Result<Json<ChildPage>> {
    log_namespace(&headers);
    let limit = req
        .limit
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .min(state.config.max_page_limit);
    let page = state
        .store
        .children_page(&req.global, &req.prefix, req.after.as_ref(), limit)
        .await?;
    AppState::count(&state.cursor_reads);
    Ok(Json(page))
}
