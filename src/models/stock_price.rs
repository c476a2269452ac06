//! Stock price model and trait implementations.
//!
//! Prices come from three endpoints: the history of one instrument, the
//! latest price of every instrument, and every instrument's price on one
//! calendar date. All three share the [`StockPrice`] record.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::BorsdataClient;
use crate::error::Result;
use crate::models::dates;
use crate::traits::List;

/// One trading day for one instrument.
///
/// Field names follow the compact wire format (`d`, `o`, `h`, `l`, `c`, `v`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    /// Instrument ID. Only present on the all-instrument endpoints.
    #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
    pub ins_id: Option<u32>,

    /// Trading date.
    #[serde(rename = "d", with = "dates::date")]
    pub date: NaiveDate,

    /// Opening price.
    #[serde(rename = "o", default)]
    pub open: Option<f64>,

    /// Highest price.
    #[serde(rename = "h", default)]
    pub high: Option<f64>,

    /// Lowest price.
    #[serde(rename = "l", default)]
    pub low: Option<f64>,

    /// Closing price.
    #[serde(rename = "c")]
    pub close: f64,

    /// Traded volume.
    #[serde(rename = "v", default)]
    pub volume: Option<u64>,
}

impl StockPrice {
    /// Check if the price falls within an inclusive date range.
    pub fn is_within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.map_or(true, |f| self.date >= f) && to.map_or(true, |t| self.date <= t)
    }

    /// Day range (high minus low), if both are known.
    pub fn spread(&self) -> Option<f64> {
        Some(self.high? - self.low?)
    }
}

/// Query parameters for an instrument's price history.
///
/// Both bounds are inclusive. Without bounds the API returns up to ten
/// years of history.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPriceQuery {
    /// First date to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,

    /// Last date to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,

    /// Maximum number of records to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
}

impl StockPriceQuery {
    /// Create a query for an inclusive date range.
    #[must_use]
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            max_count: None,
        }
    }
}

/// Query type for price history (instrument id, filters).
pub type InstrumentStockPriceQuery = (u32, StockPriceQuery);

#[derive(Debug, Serialize)]
struct DateParam {
    date: NaiveDate,
}

/// API response wrapper for all stock price endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StockPriceListResponse {
    #[serde(default)]
    stock_prices_list: Option<Vec<StockPrice>>,
}

#[async_trait]
impl List for StockPrice {
    type Query = InstrumentStockPriceQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, query: &Self::Query) -> Result<Vec<Self>> {
        let (ins_id, filters) = query;
        let path = format!("instruments/{ins_id}/stockprices");

        let data: StockPriceListResponse = client.get_json_with_query(&path, filters).await?;
        let mut prices = data.stock_prices_list.unwrap_or_default();

        // The API returns newest first.
        prices.sort_by_key(|p| p.date);

        Ok(prices)
    }
}

/// Fetch the price history of one instrument, ordered by date ascending.
///
/// An instrument id unknown to the API fails with a 404
/// [`ApiError`](crate::BorsdataError::ApiError).
///
/// # Arguments
///
/// * `client` - The Börsdata API client
/// * `ins_id` - The instrument id
/// * `query` - Optional inclusive date range and record limit
pub async fn get_stock_prices(
    client: &BorsdataClient,
    ins_id: u32,
    query: StockPriceQuery,
) -> Result<Vec<StockPrice>> {
    StockPrice::list(client, &(ins_id, query)).await
}

/// Fetch the latest price of every instrument.
#[tracing::instrument(skip(client))]
pub async fn get_stock_prices_last(client: &BorsdataClient) -> Result<Vec<StockPrice>> {
    let data: StockPriceListResponse = client.get_json("instruments/stockprices/last").await?;
    Ok(data.stock_prices_list.unwrap_or_default())
}

/// Fetch every instrument's price on one calendar date.
#[tracing::instrument(skip(client))]
pub async fn get_stock_prices_at(
    client: &BorsdataClient,
    date: NaiveDate,
) -> Result<Vec<StockPrice>> {
    let data: StockPriceListResponse = client
        .get_json_with_query("instruments/stockprices/date", &DateParam { date })
        .await?;
    Ok(data.stock_prices_list.unwrap_or_default())
}
