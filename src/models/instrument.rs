//! Instrument model and trait implementations.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::client::BorsdataClient;
use crate::error::Result;
use crate::models::dates;
use crate::traits::List;

/// A tradable security.
///
/// Instruments are identified by a numeric `ins_id` that every other
/// instrument-scoped endpoint (stock prices, reports) takes as its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Instrument ID.
    pub ins_id: u32,

    /// Company or instrument name.
    pub name: String,

    /// URL-safe name used on the Börsdata site.
    #[serde(default)]
    pub url_name: Option<String>,

    /// Instrument type code (0 = share, other values for preference shares, indexes etc.).
    #[serde(rename = "instrument", default)]
    pub instrument_type: Option<u32>,

    /// ISIN code.
    #[serde(default)]
    pub isin: Option<String>,

    /// Ticker symbol.
    #[serde(default)]
    pub ticker: Option<String>,

    /// Yahoo Finance symbol.
    #[serde(default)]
    pub yahoo: Option<String>,

    #[serde(default)]
    pub sector_id: Option<u32>,

    #[serde(default)]
    pub market_id: Option<u32>,

    #[serde(default)]
    pub branch_id: Option<u32>,

    #[serde(default)]
    pub country_id: Option<u32>,

    /// Date the instrument was first listed.
    #[serde(with = "dates::opt_date", default)]
    pub listing_date: Option<NaiveDate>,

    /// Currency stock prices are quoted in.
    #[serde(default)]
    pub stock_price_currency: Option<String>,

    /// Currency financial reports are published in.
    #[serde(default)]
    pub report_currency: Option<String>,
}

impl Instrument {
    /// Check if the instrument is listed on one of the given markets.
    pub fn is_on_market(&self, markets: &[u32]) -> bool {
        self.market_id.is_some_and(|m| markets.contains(&m))
    }
}

/// An instrument whose data changed recently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentUpdate {
    /// Instrument ID.
    pub ins_id: u32,

    /// When the instrument data was last updated.
    #[serde(with = "dates::opt_datetime", default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Query parameters for listing instruments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstrumentListQuery {
    /// Keep only instruments on these market IDs (client-side filtering).
    #[serde(skip_serializing)]
    pub markets: Option<Vec<u32>>,
}

/// Query parameters for listing updated instruments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstrumentUpdateQuery {
    /// Keep only updates at or after this time (client-side filtering).
    #[serde(skip_serializing)]
    pub since: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
struct InstrumentListResponse {
    #[serde(default)]
    instruments: Option<Vec<Instrument>>,
}

#[derive(Debug, Deserialize)]
struct InstrumentUpdateListResponse {
    #[serde(default)]
    instruments: Option<Vec<InstrumentUpdate>>,
}

#[async_trait]
impl List for Instrument {
    type Query = InstrumentListQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, query: &Self::Query) -> Result<Vec<Self>> {
        let data: InstrumentListResponse = client.get_json("instruments").await?;
        let mut instruments = data.instruments.unwrap_or_default();

        if let Some(ref markets) = query.markets {
            instruments.retain(|i| i.is_on_market(markets));
        }

        Ok(instruments)
    }
}

#[async_trait]
impl List for InstrumentUpdate {
    type Query = InstrumentUpdateQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, query: &Self::Query) -> Result<Vec<Self>> {
        let data: InstrumentUpdateListResponse = client.get_json("instruments/updated").await?;
        let mut updates = data.instruments.unwrap_or_default();

        if let Some(since) = query.since {
            updates.retain(|u| u.updated_at.is_some_and(|at| at >= since));
        }

        Ok(updates)
    }
}

/// Fetch all instruments, optionally limited to some markets.
///
/// # Arguments
///
/// * `client` - The Börsdata API client
/// * `query` - Market filter
pub async fn get_instruments(
    client: &BorsdataClient,
    query: InstrumentListQuery,
) -> Result<Vec<Instrument>> {
    Instrument::list(client, &query).await
}

/// Fetch instruments whose data was recently updated.
pub async fn get_instruments_updated(
    client: &BorsdataClient,
    query: InstrumentUpdateQuery,
) -> Result<Vec<InstrumentUpdate>> {
    InstrumentUpdate::list(client, &query).await
}
