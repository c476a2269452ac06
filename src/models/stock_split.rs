//! Stock split model.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::BorsdataClient;
use crate::error::Result;
use crate::models::dates;
use crate::traits::List;

/// A stock split (or reverse split) within the last year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSplit {
    /// Instrument that split.
    pub instrument_id: u32,

    /// Split kind as reported by the API (e.g., "Split", "Reverse split").
    #[serde(default)]
    pub split_type: Option<String>,

    /// Split ratio (e.g., "2:1").
    #[serde(default)]
    pub ratio: Option<String>,

    /// Date the split took effect.
    #[serde(with = "dates::opt_date", default)]
    pub split_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StockSplitListResponse {
    #[serde(default)]
    stock_split_list: Option<Vec<StockSplit>>,
}

#[async_trait]
impl List for StockSplit {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, _query: &()) -> Result<Vec<Self>> {
        let data: StockSplitListResponse = client.get_json("instruments/stocksplits").await?;
        Ok(data.stock_split_list.unwrap_or_default())
    }
}

/// Fetch stock splits for all instruments (at most one year back).
pub async fn get_stock_splits(client: &BorsdataClient) -> Result<Vec<StockSplit>> {
    StockSplit::list(client, &()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_split_deserialize() {
        let json = r#"{
            "stockSplitList": [
                {"instrumentId": 750, "splitType": "Split", "ratio": "4:1", "splitDate": "2021-05-20T00:00:00"}
            ]
        }"#;
        let data: StockSplitListResponse = serde_json::from_str(json).unwrap();
        let splits = data.stock_split_list.unwrap();

        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].instrument_id, 750);
        assert_eq!(splits[0].ratio.as_deref(), Some("4:1"));
        assert_eq!(splits[0].split_date, NaiveDate::from_ymd_opt(2021, 5, 20));
    }
}
