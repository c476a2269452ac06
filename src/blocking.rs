//! Blocking Börsdata client.
//!
//! Mirrors the endpoint methods of the async [`BorsdataClient`](crate::BorsdataClient)
//! and drives each request to completion on an owned current-thread runtime.
//! Must not be used from within an async context.
//!
//! ```no_run
//! use borsdata::blocking::BorsdataClient;
//! use borsdata::ReportPeriod;
//!
//! # fn main() -> borsdata::Result<()> {
//! let client = BorsdataClient::new("your-api-key")?;
//! let reports = client.reports(3, ReportPeriod::Year)?;
//! println!("{} yearly reports", reports.len());
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use chrono::NaiveDate;
use tokio::runtime::{Builder, Runtime};

use crate::client::DEFAULT_API_URL;
use crate::error::{BorsdataError, Result};
use crate::models::{
    Branch, Country, Instrument, InstrumentListQuery, InstrumentUpdate, InstrumentUpdateQuery,
    Market, Report, ReportPeriod, ReportQuery, Sector, StockPrice, StockPriceQuery, StockSplit,
};

/// Synchronous wrapper around the async client.
#[derive(Debug)]
pub struct BorsdataClient {
    inner: crate::BorsdataClient,
    runtime: Runtime,
}

impl BorsdataClient {
    /// Create a blocking client for the public Börsdata API.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Create a blocking client from `BORSDATA_API_KEY` / `BORSDATA_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_async(crate::BorsdataClient::from_env()?)
    }

    /// Create a blocking client with a custom base URL.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        Self::from_async(crate::BorsdataClient::with_base_url(api_key, base_url)?)
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: crate::BorsdataClient) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(BorsdataError::RuntimeError)?;
        Ok(Self { inner, runtime })
    }

    /// The wrapped async client.
    pub fn async_client(&self) -> &crate::BorsdataClient {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn markets(&self) -> Result<Vec<Market>> {
        self.block_on(self.inner.markets())
    }

    pub fn branches(&self) -> Result<Vec<Branch>> {
        self.block_on(self.inner.branches())
    }

    pub fn countries(&self) -> Result<Vec<Country>> {
        self.block_on(self.inner.countries())
    }

    pub fn sectors(&self) -> Result<Vec<Sector>> {
        self.block_on(self.inner.sectors())
    }

    pub fn instruments(&self, query: &InstrumentListQuery) -> Result<Vec<Instrument>> {
        self.block_on(self.inner.instruments(query))
    }

    pub fn instruments_updated(&self, query: &InstrumentUpdateQuery) -> Result<Vec<InstrumentUpdate>> {
        self.block_on(self.inner.instruments_updated(query))
    }

    /// Price history of one instrument, ordered by date ascending.
    pub fn stock_prices(&self, ins_id: u32, query: StockPriceQuery) -> Result<Vec<StockPrice>> {
        self.block_on(self.inner.stock_prices(ins_id, query))
    }

    pub fn stock_prices_last(&self) -> Result<Vec<StockPrice>> {
        self.block_on(self.inner.stock_prices_last())
    }

    pub fn stock_prices_at(&self, date: NaiveDate) -> Result<Vec<StockPrice>> {
        self.block_on(self.inner.stock_prices_at(date))
    }

    pub fn stock_splits(&self) -> Result<Vec<StockSplit>> {
        self.block_on(self.inner.stock_splits())
    }

    pub fn reports(&self, ins_id: u32, period: ReportPeriod) -> Result<Vec<Report>> {
        self.block_on(self.inner.reports(ins_id, period))
    }

    pub fn reports_with_query(&self, ins_id: u32, query: ReportQuery) -> Result<Vec<Report>> {
        self.block_on(self.inner.reports_with_query(ins_id, query))
    }
}
