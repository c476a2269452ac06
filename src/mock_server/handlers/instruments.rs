//! Instrument endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{authorize, AuthQuery};
use crate::mock_server::state::MockState;

/// GET /v1/instruments
pub async fn list_instruments(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "instruments": state.instruments })).into_response()
}

/// GET /v1/instruments/updated
pub async fn list_instrument_updates(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "instruments": state.instrument_updates })).into_response()
}

/// GET /v1/instruments/stocksplits
pub async fn list_stock_splits(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "stockSplitList": state.stock_splits })).into_response()
}
