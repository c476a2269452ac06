//! Error types for Börsdata API operations.

use thiserror::Error;

/// Errors that can occur during Börsdata API operations.
///
/// A failed remote call is reported as [`BorsdataError::ApiError`] (non-2xx
/// status) or [`BorsdataError::ParseError`] (a 2xx body that is not the
/// expected JSON). Both carry the HTTP status and the raw response body.
#[derive(Debug, Error)]
pub enum BorsdataError {
    /// Configuration is missing or incomplete.
    #[error("Börsdata configuration required: {0}")]
    ConfigMissing(String),

    /// The API answered with a non-success status.
    #[error("Börsdata API error (HTTP {status_code}): {message}")]
    ApiError {
        status_code: u16,
        message: String,
        body: String,
    },

    /// The API answered with a success status but the body could not be decoded.
    #[error("Failed to parse response (HTTP {status_code}): {source}")]
    ParseError {
        status_code: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// The blocking client could not start its runtime.
    #[cfg(feature = "blocking")]
    #[error("Failed to start runtime: {0}")]
    RuntimeError(#[source] std::io::Error),
}

impl BorsdataError {
    /// HTTP status of the failed remote call, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } | Self::ParseError { status_code, .. } => {
                Some(*status_code)
            }
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body of the failed remote call, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::ApiError { body, .. } | Self::ParseError { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the remote call itself failed (transport, status or body).
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. } | Self::ParseError { .. } | Self::HttpError(_)
        )
    }

    /// Whether the API rejected the key (401 or 403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401 | 403))
    }

    /// Whether the requested resource does not exist (404).
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Whether the API rate limit was hit (429).
    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(429)
    }
}

/// Result type alias for Börsdata operations.
pub type Result<T> = core::result::Result<T, BorsdataError>;
