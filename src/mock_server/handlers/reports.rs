//! Report endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{authorize, error_response, AuthQuery};
use crate::mock_server::state::MockState;
use crate::ReportPeriod;

/// Query parameters for listing reports.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportListQuery {
    pub max_count: Option<usize>,
}

/// GET /v1/instruments/{id}/reports/{period}
pub async fn list_reports(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((ins_id, period)): Path<(u32, String)>,
    Query(auth): Query<AuthQuery>,
    Query(query): Query<ReportListQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &auth) {
        return rejection;
    }

    let period: ReportPeriod = match period.parse() {
        Ok(p) => p,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, &message),
    };

    match state.reports_for(ins_id, period, query.max_count) {
        Some(reports) => Json(serde_json::json!({
            "instrument": ins_id,
            "reports": reports
        }))
        .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("No instrument found with id: {ins_id}"),
        ),
    }
}
