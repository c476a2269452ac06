//! Reference lists: markets, branches, countries and sectors.
//!
//! These are small, rarely changing enumerations. Each is served by its own
//! parameterless endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::BorsdataClient;
use crate::error::Result;
use crate::traits::List;

/// A market (exchange list or index) instruments are listed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market ID.
    pub id: u32,

    /// Market name (e.g., "Large Cap").
    pub name: String,

    /// Country the market belongs to.
    #[serde(default)]
    pub country_id: Option<u32>,

    /// Whether this market is an index rather than a trading list.
    #[serde(default)]
    pub is_index: bool,

    /// Name of the exchange (e.g., "Nasdaq Stockholm").
    #[serde(default)]
    pub exchange_name: Option<String>,
}

/// An industry branch. Branches are grouped into sectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Branch ID.
    pub id: u32,

    /// Branch name.
    pub name: String,

    /// Sector the branch belongs to.
    #[serde(default)]
    pub sector_id: Option<u32>,
}

/// A country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: u32,
    pub name: String,
}

/// A sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: u32,
    pub name: String,
}

impl Market {
    /// Markets with `is_index` set list index series, not tradable stocks.
    pub fn is_trading_list(&self) -> bool {
        !self.is_index
    }
}

#[derive(Debug, Deserialize)]
struct MarketListResponse {
    #[serde(default)]
    markets: Option<Vec<Market>>,
}

#[derive(Debug, Deserialize)]
struct BranchListResponse {
    #[serde(default)]
    branches: Option<Vec<Branch>>,
}

#[derive(Debug, Deserialize)]
struct CountryListResponse {
    #[serde(default)]
    countries: Option<Vec<Country>>,
}

#[derive(Debug, Deserialize)]
struct SectorListResponse {
    #[serde(default)]
    sectors: Option<Vec<Sector>>,
}

#[async_trait]
impl List for Market {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, _query: &()) -> Result<Vec<Self>> {
        let data: MarketListResponse = client.get_json("markets").await?;
        Ok(data.markets.unwrap_or_default())
    }
}

#[async_trait]
impl List for Branch {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, _query: &()) -> Result<Vec<Self>> {
        let data: BranchListResponse = client.get_json("branches").await?;
        Ok(data.branches.unwrap_or_default())
    }
}

#[async_trait]
impl List for Country {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, _query: &()) -> Result<Vec<Self>> {
        let data: CountryListResponse = client.get_json("countries").await?;
        Ok(data.countries.unwrap_or_default())
    }
}

#[async_trait]
impl List for Sector {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, _query: &()) -> Result<Vec<Self>> {
        let data: SectorListResponse = client.get_json("sectors").await?;
        Ok(data.sectors.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "Large Cap",
            "countryId": 1,
            "isIndex": false,
            "exchangeName": "Nasdaq Stockholm"
        }"#;

        let market: Market = serde_json::from_str(json).expect("Failed to deserialize market");

        assert_eq!(market.id, 1);
        assert_eq!(market.name, "Large Cap");
        assert_eq!(market.country_id, Some(1));
        assert!(market.is_trading_list());
        assert_eq!(market.exchange_name.as_deref(), Some("Nasdaq Stockholm"));
    }

    #[test]
    fn test_market_minimal() {
        let market: Market = serde_json::from_str(r#"{"id": 7, "name": "OMXS30"}"#).unwrap();
        assert!(!market.is_index);
        assert!(market.country_id.is_none());
    }

    #[test]
    fn test_branch_deserialize() {
        let branch: Branch =
            serde_json::from_str(r#"{"id": 12, "name": "Banker", "sectorId": 3}"#).unwrap();
        assert_eq!(branch.sector_id, Some(3));
    }

    #[test]
    fn test_null_list_is_empty() {
        let data: SectorListResponse = serde_json::from_str(r#"{"sectors": null}"#).unwrap();
        assert!(data.sectors.unwrap_or_default().is_empty());

        let data: CountryListResponse = serde_json::from_str("{}").unwrap();
        assert!(data.countries.unwrap_or_default().is_empty());
    }
}
