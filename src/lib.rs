//! Börsdata API client library.
//!
//! A Rust library for the Börsdata REST API. Each endpoint is reached
//! through the [`List`] trait implemented by its entity type, through a
//! convenience free function, or through a method on [`BorsdataClient`].
//!
//! # Quick Start
//!
//! ```no_run
//! use borsdata::{BorsdataClient, List, Market, ReportPeriod, StockPriceQuery};
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> borsdata::Result<()> {
//!     let client = BorsdataClient::new("your-api-key")?;
//!
//!     // Reference lists
//!     let markets = Market::list(&client, &()).await?;
//!     println!("Found {} markets", markets.len());
//!
//!     // Price history for one instrument, inclusive range
//!     let from = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//!     let to = NaiveDate::from_ymd_opt(2020, 3, 31).unwrap();
//!     let prices = client.stock_prices(3, StockPriceQuery::between(from, to)).await?;
//!     println!("Got {} prices", prices.len());
//!
//!     // Quarterly reports
//!     let reports = client.reports(3, ReportPeriod::Quarter).await?;
//!     println!("Got {} reports", reports.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! A failed remote call surfaces as [`BorsdataError::ApiError`] or
//! [`BorsdataError::ParseError`], both carrying the HTTP status and raw
//! body. Nothing is retried; a rate-limited call (HTTP 429) is reported
//! like any other failure and can be detected with
//! [`BorsdataError::is_rate_limited`].
//!
//! # Configuration
//!
//! [`BorsdataClient::from_env`] reads:
//!
//! - `BORSDATA_API_KEY` (required) - Your Börsdata API key
//! - `BORSDATA_API_URL` (optional) - Base URL (defaults to `https://apiservice.borsdata.se/v1`)

mod client;
mod endpoints;
mod error;
mod models;
mod traits;

#[cfg(feature = "blocking")]
pub mod blocking;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{BorsdataClient, DEFAULT_API_URL};
pub use error::{BorsdataError, Result};

// Re-export traits
pub use traits::List;

// Re-export models
pub use models::{
    // Reference lists
    Branch,
    Country,
    Market,
    Sector,
    // Instrument types
    Instrument,
    InstrumentListQuery,
    InstrumentUpdate,
    InstrumentUpdateQuery,
    // Price types
    InstrumentStockPriceQuery,
    StockPrice,
    StockPriceQuery,
    StockSplit,
    // Report types
    InstrumentReportQuery,
    Report,
    ReportPeriod,
    ReportQuery,
};

// Re-export convenience functions
pub use models::{get_instruments, get_instruments_updated};
pub use models::{get_reports, get_stock_splits};
pub use models::{get_stock_prices, get_stock_prices_at, get_stock_prices_last};
