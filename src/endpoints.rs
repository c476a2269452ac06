//! One method per Börsdata endpoint on [`BorsdataClient`].
//!
//! These delegate to the [`List`] implementations on the model types and
//! exist so callers can reach every endpoint from the client value alone.

use chrono::NaiveDate;

use crate::client::BorsdataClient;
use crate::error::Result;
use crate::models::{
    get_stock_prices_at, get_stock_prices_last, Branch, Country, Instrument, InstrumentListQuery,
    InstrumentUpdate, InstrumentUpdateQuery, Market, Report, ReportPeriod, ReportQuery, Sector,
    StockPrice, StockPriceQuery, StockSplit,
};
use crate::traits::List;

impl BorsdataClient {
    /// All markets.
    pub async fn markets(&self) -> Result<Vec<Market>> {
        Market::list(self, &()).await
    }

    /// All industry branches.
    pub async fn branches(&self) -> Result<Vec<Branch>> {
        Branch::list(self, &()).await
    }

    /// All countries.
    pub async fn countries(&self) -> Result<Vec<Country>> {
        Country::list(self, &()).await
    }

    /// All sectors.
    pub async fn sectors(&self) -> Result<Vec<Sector>> {
        Sector::list(self, &()).await
    }

    /// All instruments, optionally limited to some markets.
    pub async fn instruments(&self, query: &InstrumentListQuery) -> Result<Vec<Instrument>> {
        Instrument::list(self, query).await
    }

    /// Instruments with recently updated data.
    pub async fn instruments_updated(
        &self,
        query: &InstrumentUpdateQuery,
    ) -> Result<Vec<InstrumentUpdate>> {
        InstrumentUpdate::list(self, query).await
    }

    /// Price history of one instrument, ordered by date ascending.
    ///
    /// # Errors
    ///
    /// Fails with a 404 [`ApiError`](crate::BorsdataError::ApiError) if the
    /// instrument id is unknown.
    pub async fn stock_prices(&self, ins_id: u32, query: StockPriceQuery) -> Result<Vec<StockPrice>> {
        StockPrice::list(self, &(ins_id, query)).await
    }

    /// Latest price of every instrument.
    pub async fn stock_prices_last(&self) -> Result<Vec<StockPrice>> {
        get_stock_prices_last(self).await
    }

    /// Price of every instrument on one calendar date.
    pub async fn stock_prices_at(&self, date: NaiveDate) -> Result<Vec<StockPrice>> {
        get_stock_prices_at(self, date).await
    }

    /// Stock splits of the last year.
    pub async fn stock_splits(&self) -> Result<Vec<StockSplit>> {
        StockSplit::list(self, &()).await
    }

    /// Financial reports of one instrument for one period kind.
    pub async fn reports(&self, ins_id: u32, period: ReportPeriod) -> Result<Vec<Report>> {
        self.reports_with_query(ins_id, ReportQuery::new(period)).await
    }

    /// Financial reports of one instrument with extra filters.
    pub async fn reports_with_query(&self, ins_id: u32, query: ReportQuery) -> Result<Vec<Report>> {
        Report::list(self, &(ins_id, query)).await
    }
}
