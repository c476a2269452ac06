//! Reference list endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{authorize, AuthQuery};
use crate::mock_server::state::MockState;

/// GET /v1/markets
pub async fn list_markets(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "markets": state.markets })).into_response()
}

/// GET /v1/branches
pub async fn list_branches(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "branches": state.branches })).into_response()
}

/// GET /v1/countries
pub async fn list_countries(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "countries": state.countries })).into_response()
}

/// GET /v1/sectors
pub async fn list_sectors(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "sectors": state.sectors })).into_response()
}
