//! Börsdata API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Endpoint operations are implemented via the [`List`](crate::List) trait on
//! entity types and surfaced as convenience methods in `endpoints`.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{BorsdataError, Result};

/// Default base URL of the Börsdata REST API.
pub const DEFAULT_API_URL: &str = "https://apiservice.borsdata.se/v1";
const USER_AGENT: &str = concat!("borsdata/", env!("CARGO_PKG_VERSION"));
const AUTH_PARAM: &str = "authKey";

/// Low-level Börsdata API client.
///
/// Holds the API key and base URL. Every call performs exactly one GET
/// request; nothing is cached or retried.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use borsdata::BorsdataClient;
///
/// # fn example() -> borsdata::Result<()> {
/// // Use the public API endpoint
/// let client = BorsdataClient::new("your-api-key")?;
///
/// // Or point at another host
/// let client = BorsdataClient::with_base_url("your-api-key", "http://localhost:8080/v1")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BorsdataClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for BorsdataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BorsdataClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl BorsdataClient {
    /// Create a client for the public Börsdata API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Create a client from environment variables.
    ///
    /// Uses `BORSDATA_API_KEY` for authentication and optionally
    /// `BORSDATA_API_URL` for the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `BORSDATA_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("BORSDATA_API_KEY").map_err(|_| {
            BorsdataError::ConfigMissing("BORSDATA_API_KEY environment variable not set".to_string())
        })?;

        let base_url =
            env::var("BORSDATA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::with_base_url(&api_key, &base_url)
    }

    /// Create a client with the provided key and base URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Börsdata API key
    /// * `base_url` - Base URL including the version segment (e.g., `https://apiservice.borsdata.se/v1`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| BorsdataError::HttpError(e.without_url()))?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.get_with_query(path, &[] as &[(&str, &str)]).await
    }

    /// Make a GET request with query parameters.
    ///
    /// The API key is appended as the `authKey` parameter.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .query(&[(AUTH_PARAM, self.api_key.as_str())])
            .query(query)
            .send()
            .await
            // The request URL carries the key, keep it out of the error.
            .map_err(|e| BorsdataError::HttpError(e.without_url()))?;

        tracing::debug!(status = response.status().as_u16(), "response received");

        Self::check_response(response).await
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        Self::decode(response).await
    }

    /// GET a path with query parameters and decode the JSON body.
    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.get_with_query(path, query).await?;
        Self::decode(response).await
    }

    /// Decode a successful response body, keeping the raw text on failure.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BorsdataError::HttpError(e.without_url()))?;

        serde_json::from_str(&body).map_err(|source| BorsdataError::ParseError {
            status_code,
            body,
            source,
        })
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body, status);

        Err(BorsdataError::ApiError {
            status_code: status.as_u16(),
            message,
            body,
        })
    }
}

/// Extract an error message from a failed response body.
fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
    // Try to parse as JSON and extract message field
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
        if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
            return err.to_string();
        }
    }

    if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}
