//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::BorsdataClient;
use crate::error::Result;

/// Fetch a collection of entities from one endpoint.
///
/// Every Börsdata endpoint answers with a JSON object holding a single list
/// (e.g. `{"markets": [...]}`). Implementors issue exactly one request and
/// return that list, empty when the key is absent.
///
/// # Example
///
/// ```ignore
/// use borsdata::{BorsdataClient, List, Market, StockPrice, StockPriceQuery};
///
/// let client = BorsdataClient::new("your-api-key")?;
///
/// // Reference lists take no parameters
/// let markets = Market::list(&client, &()).await?;
///
/// // Instrument-scoped endpoints take (instrument id, filters)
/// let prices = StockPrice::list(&client, &(3, StockPriceQuery::default())).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Parameters for the request.
    type Query: Default + Send + Sync;

    /// Fetch all entities matching the query.
    ///
    /// # Arguments
    ///
    /// * `client` - The Börsdata API client
    /// * `query` - Parameters for the request
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    async fn list(client: &BorsdataClient, query: &Self::Query) -> Result<Vec<Self>>;
}
