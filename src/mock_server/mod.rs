//! Mock Börsdata API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Börsdata
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server answers every endpoint from shared
//! fixtures, applying the same filters the real API does.
//!
//! # Example
//!
//! ```ignore
//! use borsdata::mock_server::MockServer;
//! use borsdata::BorsdataClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = BorsdataClient::with_base_url("test-key", &server.api_url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let markets = client.markets().await.unwrap();
//!     assert_eq!(markets[0].name, "Large Cap");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, DEFAULT_INS_ID};
pub use server::MockServer;
pub use state::MockState;
