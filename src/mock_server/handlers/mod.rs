//! HTTP request handlers for the mock server.

pub mod instruments;
pub mod reference;
pub mod reports;
pub mod stock_prices;

pub use instruments::*;
pub use reference::*;
pub use reports::*;
pub use stock_prices::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::mock_server::state::MockState;

/// The `authKey` query parameter carried by every request.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    #[serde(rename = "authKey")]
    pub auth_key: Option<String>,
}

/// Reject the request unless it carries the required key.
pub(crate) fn authorize(state: &MockState, auth: &AuthQuery) -> Result<(), Response> {
    if state.is_authorized(auth.auth_key.as_deref()) {
        Ok(())
    } else {
        Err(error_response(StatusCode::UNAUTHORIZED, "Invalid authKey"))
    }
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}
