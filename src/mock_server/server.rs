//! Mock Börsdata API server.
//!
//! Provides an axum-based HTTP server that simulates the Börsdata API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock Börsdata API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening, without the version segment.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `api_url()` to get the base URL for a client.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the root URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the versioned API base URL.
    ///
    /// Use this URL when creating a `BorsdataClient` for testing.
    pub fn api_url(&self) -> String {
        format!("{}/v1", self.url)
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        state.markets = scenario.markets;
        state.branches = scenario.branches;
        state.countries = scenario.countries;
        state.sectors = scenario.sectors;
        state.instruments = scenario.instruments;
        state.instrument_updates = scenario.instrument_updates;
        state.stock_splits = scenario.stock_splits;

        for (ins_id, prices) in scenario.stock_prices {
            state.stock_prices.insert(ins_id, prices);
        }

        for (ins_id, period, reports) in scenario.reports {
            state.reports.insert((ins_id, period), reports);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Reference lists
            .route("/v1/markets", get(handlers::list_markets))
            .route("/v1/branches", get(handlers::list_branches))
            .route("/v1/countries", get(handlers::list_countries))
            .route("/v1/sectors", get(handlers::list_sectors))
            // Instrument routes
            .route("/v1/instruments", get(handlers::list_instruments))
            .route(
                "/v1/instruments/updated",
                get(handlers::list_instrument_updates),
            )
            .route(
                "/v1/instruments/stocksplits",
                get(handlers::list_stock_splits),
            )
            // Stock price routes
            .route(
                "/v1/instruments/stockprices/last",
                get(handlers::list_last_stock_prices),
            )
            .route(
                "/v1/instruments/stockprices/date",
                get(handlers::list_stock_prices_at),
            )
            .route(
                "/v1/instruments/:id/stockprices",
                get(handlers::list_stock_prices),
            )
            // Report routes
            .route(
                "/v1/instruments/:id/reports/:period",
                get(handlers::list_reports),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
