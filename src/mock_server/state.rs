//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Börsdata API server.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::{
    Branch, Country, Instrument, InstrumentUpdate, Market, Report, ReportPeriod, Sector,
    StockPrice, StockSplit,
};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    pub markets: Vec<Market>,
    pub branches: Vec<Branch>,
    pub countries: Vec<Country>,
    pub sectors: Vec<Sector>,
    pub instruments: Vec<Instrument>,
    pub instrument_updates: Vec<InstrumentUpdate>,

    /// Price history indexed by instrument ID.
    pub stock_prices: HashMap<u32, Vec<StockPrice>>,

    /// Reports indexed by instrument ID and period kind.
    pub reports: HashMap<(u32, ReportPeriod), Vec<Report>>,

    pub stock_splits: Vec<StockSplit>,

    /// Optional API key. If set, requests must carry it as `authKey`.
    pub required_key: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a market to the state.
    pub fn with_market(mut self, market: Market) -> Self {
        self.markets.push(market);
        self
    }

    /// Add an instrument to the state.
    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Set the price history of an instrument.
    pub fn with_stock_prices(mut self, ins_id: u32, prices: Vec<StockPrice>) -> Self {
        self.stock_prices.insert(ins_id, prices);
        self
    }

    /// Set the reports of an instrument for one period kind.
    pub fn with_reports(mut self, ins_id: u32, period: ReportPeriod, reports: Vec<Report>) -> Self {
        self.reports.insert((ins_id, period), reports);
        self
    }

    /// Set the required API key.
    pub fn with_required_key(mut self, key: &str) -> Self {
        self.required_key = Some(key.to_string());
        self
    }

    /// Check a request's `authKey` against the required key.
    pub fn is_authorized(&self, key: Option<&str>) -> bool {
        match self.required_key {
            Some(ref required) => key == Some(required.as_str()),
            None => true,
        }
    }

    /// Price history for an instrument within an inclusive range, newest first.
    ///
    /// Returns `None` if the instrument has no price history.
    pub fn stock_prices_between(
        &self,
        ins_id: u32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        max_count: Option<usize>,
    ) -> Option<Vec<StockPrice>> {
        let history = self.stock_prices.get(&ins_id)?;

        let mut prices: Vec<StockPrice> = history
            .iter()
            .filter(|p| p.is_within(from, to))
            .cloned()
            .collect();

        prices.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(max) = max_count {
            prices.truncate(max);
        }

        Some(prices)
    }

    /// Latest price of every instrument, tagged with its instrument ID.
    pub fn latest_stock_prices(&self) -> Vec<StockPrice> {
        let mut latest: Vec<StockPrice> = self
            .stock_prices
            .iter()
            .filter_map(|(ins_id, history)| {
                history.iter().max_by_key(|p| p.date).map(|p| StockPrice {
                    ins_id: Some(*ins_id),
                    ..p.clone()
                })
            })
            .collect();

        latest.sort_by_key(|p| p.ins_id);
        latest
    }

    /// Price of every instrument traded on a date, tagged with its instrument ID.
    pub fn stock_prices_at(&self, date: NaiveDate) -> Vec<StockPrice> {
        let mut prices: Vec<StockPrice> = self
            .stock_prices
            .iter()
            .filter_map(|(ins_id, history)| {
                history.iter().find(|p| p.date == date).map(|p| StockPrice {
                    ins_id: Some(*ins_id),
                    ..p.clone()
                })
            })
            .collect();

        prices.sort_by_key(|p| p.ins_id);
        prices
    }

    /// Reports for an instrument and period kind, newest first.
    ///
    /// Returns `None` if the instrument is unknown.
    pub fn reports_for(
        &self,
        ins_id: u32,
        period: ReportPeriod,
        max_count: Option<usize>,
    ) -> Option<Vec<Report>> {
        let known = self.instruments.iter().any(|i| i.ins_id == ins_id)
            || self.reports.keys().any(|(id, _)| *id == ins_id);
        if !known {
            return None;
        }

        let mut reports = self
            .reports
            .get(&(ins_id, period))
            .cloned()
            .unwrap_or_default();

        reports.sort_by(|a, b| (b.year, b.period).cmp(&(a.year, a.period)));
        if let Some(max) = max_count {
            reports.truncate(max);
        }

        Some(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn test_state_authorization() {
        let open = MockState::new();
        assert!(open.is_authorized(None));

        let locked = MockState::new().with_required_key("secret");
        assert!(locked.is_authorized(Some("secret")));
        assert!(!locked.is_authorized(Some("wrong")));
        assert!(!locked.is_authorized(None));
    }

    #[test]
    fn test_stock_prices_between_is_inclusive() {
        let state = MockState::new().with_stock_prices(
            3,
            (2..=8).map(|d| Fixtures::stock_price(day(d), 100.0 + d as f64)).collect(),
        );

        let prices = state
            .stock_prices_between(3, Some(day(3)), Some(day(5)), None)
            .unwrap();

        assert_eq!(prices.len(), 3);
        assert_eq!(prices[0].date, day(5));
        assert_eq!(prices[2].date, day(3));

        assert!(state.stock_prices_between(99, None, None, None).is_none());
    }

    #[test]
    fn test_stock_prices_max_count_keeps_newest() {
        let state = MockState::new().with_stock_prices(
            3,
            (2..=8).map(|d| Fixtures::stock_price(day(d), 1.0)).collect(),
        );

        let prices = state.stock_prices_between(3, None, None, Some(2)).unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].date, day(8));
    }

    #[test]
    fn test_snapshots_tag_instrument() {
        let state = MockState::new()
            .with_stock_prices(3, vec![Fixtures::stock_price(day(2), 1.0), Fixtures::stock_price(day(3), 2.0)])
            .with_stock_prices(4, vec![Fixtures::stock_price(day(2), 5.0)]);

        let latest = state.latest_stock_prices();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].ins_id, Some(3));
        assert_eq!(latest[0].date, day(3));

        let at = state.stock_prices_at(day(3));
        assert_eq!(at.len(), 1);
        assert_eq!(at[0].ins_id, Some(3));
    }

    #[test]
    fn test_reports_for_unknown_instrument() {
        let state = MockState::new().with_reports(
            3,
            ReportPeriod::Year,
            vec![Fixtures::report(2019, 5), Fixtures::report(2020, 5)],
        );

        let reports = state.reports_for(3, ReportPeriod::Year, None).unwrap();
        assert_eq!(reports[0].year, 2020);

        assert!(state.reports_for(3, ReportPeriod::Quarter, None).unwrap().is_empty());
        assert!(state.reports_for(42, ReportPeriod::Year, None).is_none());
    }
}
