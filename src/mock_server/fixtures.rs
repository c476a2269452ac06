//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::NaiveDate;

use crate::{
    Branch, Country, Instrument, InstrumentUpdate, Market, Report, ReportPeriod, Sector,
    StockPrice, StockSplit,
};

/// Instrument with full price history and reports in the default scenario.
pub const DEFAULT_INS_ID: u32 = 3;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Reference Fixtures
    // =========================================================================

    /// Create a trading-list market.
    pub fn market(id: u32, name: &str) -> Market {
        Market {
            id,
            name: name.to_string(),
            country_id: Some(1),
            is_index: false,
            exchange_name: Some("Nasdaq Stockholm".to_string()),
        }
    }

    // =========================================================================
    // Instrument Fixtures
    // =========================================================================

    /// Create a minimal instrument listed on one market.
    pub fn instrument(ins_id: u32, name: &str, market_id: u32) -> Instrument {
        Instrument {
            ins_id,
            name: name.to_string(),
            url_name: Some(name.to_lowercase().replace(' ', "-")),
            instrument_type: Some(0),
            isin: None,
            ticker: Some(name.to_uppercase()),
            yahoo: None,
            sector_id: Some(1),
            market_id: Some(market_id),
            branch_id: Some(1),
            country_id: Some(1),
            listing_date: None,
            stock_price_currency: Some("SEK".to_string()),
            report_currency: Some("SEK".to_string()),
        }
    }

    // =========================================================================
    // Price Fixtures
    // =========================================================================

    /// Create a price for one day around a closing price.
    pub fn stock_price(date: NaiveDate, close: f64) -> StockPrice {
        StockPrice {
            ins_id: None,
            date,
            open: Some(close - 0.5),
            high: Some(close + 1.0),
            low: Some(close - 1.0),
            close,
            volume: Some(100_000),
        }
    }

    /// Create one price per weekday in an inclusive range.
    pub fn trading_days(from: NaiveDate, to: NaiveDate, start_close: f64) -> Vec<StockPrice> {
        use chrono::{Datelike, Weekday};

        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .enumerate()
            .map(|(i, d)| Self::stock_price(d, start_close + i as f64))
            .collect()
    }

    // =========================================================================
    // Report Fixtures
    // =========================================================================

    /// Create a report with a few headline figures.
    pub fn report(year: i32, period: i32) -> Report {
        Report {
            kind: ReportPeriod::default(),
            year,
            period,
            revenues: Some(1000.0),
            net_sales: Some(1000.0),
            gross_income: Some(400.0),
            operating_income: Some(150.0),
            profit_before_tax: Some(140.0),
            profit_to_equity_holders: Some(110.0),
            earnings_per_share: Some(1.1),
            number_of_shares: Some(100.0),
            dividend: None,
            intangible_assets: None,
            tangible_assets: None,
            financial_assets: None,
            non_current_assets: None,
            cash_and_equivalents: Some(80.0),
            current_assets: None,
            total_assets: Some(2000.0),
            total_equity: Some(800.0),
            non_current_liabilities: None,
            current_liabilities: None,
            total_liabilities_and_equity: Some(2000.0),
            net_debt: None,
            cash_flow_from_operating_activities: None,
            cash_flow_from_investing_activities: None,
            cash_flow_from_financing_activities: None,
            cash_flow_for_the_year: None,
            free_cash_flow: None,
            stock_price_average: None,
            stock_price_high: None,
            stock_price_low: None,
            report_start_date: None,
            report_end_date: None,
            report_date: None,
            broken_fiscal_year: false,
            currency: Some("SEK".to_string()),
            currency_ratio: Some(1.0),
        }
    }

    /// Create a quarterly report with its covered date range.
    pub fn quarterly_report(year: i32, quarter: u32) -> Report {
        let start = NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1);
        let end = start
            .and_then(|s| s.checked_add_months(chrono::Months::new(3)))
            .and_then(|s| s.pred_opt());

        let mut report = Self::report(year, quarter as i32);
        report.revenues = Some(250.0);
        report.report_start_date = start;
        report.report_end_date = end;
        report
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub markets: Vec<Market>,
    pub branches: Vec<Branch>,
    pub countries: Vec<Country>,
    pub sectors: Vec<Sector>,
    pub instruments: Vec<Instrument>,
    pub instrument_updates: Vec<InstrumentUpdate>,
    pub stock_prices: Vec<(u32, Vec<StockPrice>)>,
    pub reports: Vec<(u32, ReportPeriod, Vec<Report>)>,
    pub stock_splits: Vec<StockSplit>,
}

impl DefaultScenario {
    fn new() -> Self {
        let day = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap_or_default();

        let markets = vec![
            Fixtures::market(1, "Large Cap"),
            Fixtures::market(2, "Mid Cap"),
            Market {
                is_index: true,
                ..Fixtures::market(3, "Index")
            },
        ];

        let branches = vec![
            Branch {
                id: 1,
                name: "Verkstad".to_string(),
                sector_id: Some(1),
            },
            Branch {
                id: 2,
                name: "Banker".to_string(),
                sector_id: Some(2),
            },
        ];

        let countries = vec![Country {
            id: 1,
            name: "Sverige".to_string(),
        }];

        let sectors = vec![
            Sector {
                id: 1,
                name: "Industri".to_string(),
            },
            Sector {
                id: 2,
                name: "Finans & Fastighet".to_string(),
            },
        ];

        let instruments = vec![
            Fixtures::instrument(DEFAULT_INS_ID, "ABB", 1),
            Fixtures::instrument(97, "Ericsson", 1),
            Fixtures::instrument(750, "Nolato", 2),
        ];

        let instrument_updates = vec![
            InstrumentUpdate {
                ins_id: DEFAULT_INS_ID,
                updated_at: day(1, 31).and_hms_opt(18, 0, 0),
            },
            InstrumentUpdate {
                ins_id: 750,
                updated_at: day(1, 10).and_hms_opt(8, 30, 0),
            },
        ];

        let stock_prices = vec![
            (
                DEFAULT_INS_ID,
                Fixtures::trading_days(day(1, 2), day(1, 31), 200.0),
            ),
            (97, Fixtures::trading_days(day(1, 2), day(1, 17), 90.0)),
        ];

        let reports = vec![
            (
                DEFAULT_INS_ID,
                ReportPeriod::Year,
                vec![Fixtures::report(2018, 5), Fixtures::report(2019, 5)],
            ),
            (
                DEFAULT_INS_ID,
                ReportPeriod::R12,
                vec![Fixtures::report(2019, 4), Fixtures::report(2020, 1)],
            ),
            (
                DEFAULT_INS_ID,
                ReportPeriod::Quarter,
                (1..=4).map(|q| Fixtures::quarterly_report(2019, q)).collect(),
            ),
        ];

        let stock_splits = vec![StockSplit {
            instrument_id: 750,
            split_type: Some("Split".to_string()),
            ratio: Some("4:1".to_string()),
            split_date: Some(day(1, 15)),
        }];

        Self {
            markets,
            branches,
            countries,
            sectors,
            instruments,
            instrument_updates,
            stock_prices,
            reports,
            stock_splits,
        }
    }
}
