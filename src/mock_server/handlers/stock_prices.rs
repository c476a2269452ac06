//! Stock price endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{authorize, error_response, AuthQuery};
use crate::mock_server::state::MockState;

/// Query parameters for an instrument's price history.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPriceHistoryQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub max_count: Option<usize>,
}

/// Query parameters for the per-date snapshot.
#[derive(Debug, Default, Deserialize)]
pub struct StockPriceDateQuery {
    pub date: Option<NaiveDate>,
}

/// GET /v1/instruments/{id}/stockprices
pub async fn list_stock_prices(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(ins_id): Path<u32>,
    Query(auth): Query<AuthQuery>,
    Query(query): Query<StockPriceHistoryQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }

    match state.stock_prices_between(ins_id, query.from, query.to, query.max_count) {
        Some(prices) => Json(serde_json::json!({
            "instrument": ins_id,
            "stockPricesList": prices
        }))
        .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("No instrument found with id: {ins_id}"),
        ),
    }
}

/// GET /v1/instruments/stockprices/last
pub async fn list_last_stock_prices(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }
    Json(serde_json::json!({ "stockPricesList": state.latest_stock_prices() })).into_response()
}

/// GET /v1/instruments/stockprices/date
pub async fn list_stock_prices_at(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(auth): Query<AuthQuery>,
    Query(query): Query<StockPriceDateQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }

    match query.date {
        Some(date) => {
            Json(serde_json::json!({ "stockPricesList": state.stock_prices_at(date) }))
                .into_response()
        }
        None => error_response(StatusCode::BAD_REQUEST, "Missing date parameter"),
    }
}
