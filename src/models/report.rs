//! Financial report model and trait implementations.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::BorsdataClient;
use crate::error::Result;
use crate::models::dates;
use crate::traits::List;

/// Report granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Full fiscal years.
    Year,
    /// Rolling twelve months.
    R12,
    /// Single quarters.
    #[default]
    Quarter,
}

impl ReportPeriod {
    /// All period kinds, in API order.
    pub const ALL: [ReportPeriod; 3] = [Self::Year, Self::R12, Self::Quarter];

    /// The path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::R12 => "r12",
            Self::Quarter => "quarter",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "r12" => Ok(Self::R12),
            "quarter" => Ok(Self::Quarter),
            other => Err(format!("unknown report period '{other}', expected year, r12 or quarter")),
        }
    }
}

/// One financial report for an instrument.
///
/// Monetary figures are in millions of `currency`. Field names on the wire
/// use Börsdata's `snake_Case` convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Period kind this report was fetched as. Set by the client, not sent by the API.
    #[serde(skip_deserializing, default)]
    pub kind: ReportPeriod,

    /// Fiscal year.
    pub year: i32,

    /// Period within the year (quarter number for quarterly reports).
    pub period: i32,

    #[serde(default)]
    pub revenues: Option<f64>,
    #[serde(rename = "net_Sales", default)]
    pub net_sales: Option<f64>,
    #[serde(rename = "gross_Income", default)]
    pub gross_income: Option<f64>,
    #[serde(rename = "operating_Income", default)]
    pub operating_income: Option<f64>,
    #[serde(rename = "profit_Before_Tax", default)]
    pub profit_before_tax: Option<f64>,
    #[serde(rename = "profit_To_Equity_Holders", default)]
    pub profit_to_equity_holders: Option<f64>,
    #[serde(rename = "earnings_Per_Share", default)]
    pub earnings_per_share: Option<f64>,
    #[serde(rename = "number_Of_Shares", default)]
    pub number_of_shares: Option<f64>,
    #[serde(default)]
    pub dividend: Option<f64>,

    #[serde(rename = "intangible_Assets", default)]
    pub intangible_assets: Option<f64>,
    #[serde(rename = "tangible_Assets", default)]
    pub tangible_assets: Option<f64>,
    #[serde(rename = "financial_Assets", default)]
    pub financial_assets: Option<f64>,
    #[serde(rename = "non_Current_Assets", default)]
    pub non_current_assets: Option<f64>,
    #[serde(rename = "cash_And_Equivalents", default)]
    pub cash_and_equivalents: Option<f64>,
    #[serde(rename = "current_Assets", default)]
    pub current_assets: Option<f64>,
    #[serde(rename = "total_Assets", default)]
    pub total_assets: Option<f64>,
    #[serde(rename = "total_Equity", default)]
    pub total_equity: Option<f64>,
    #[serde(rename = "non_Current_Liabilities", default)]
    pub non_current_liabilities: Option<f64>,
    #[serde(rename = "current_Liabilities", default)]
    pub current_liabilities: Option<f64>,
    #[serde(rename = "total_Liabilities_And_Equity", default)]
    pub total_liabilities_and_equity: Option<f64>,
    #[serde(rename = "net_Debt", default)]
    pub net_debt: Option<f64>,

    #[serde(rename = "cash_Flow_From_Operating_Activities", default)]
    pub cash_flow_from_operating_activities: Option<f64>,
    #[serde(rename = "cash_Flow_From_Investing_Activities", default)]
    pub cash_flow_from_investing_activities: Option<f64>,
    #[serde(rename = "cash_Flow_From_Financing_Activities", default)]
    pub cash_flow_from_financing_activities: Option<f64>,
    #[serde(rename = "cash_Flow_For_The_Year", default)]
    pub cash_flow_for_the_year: Option<f64>,
    #[serde(rename = "free_Cash_Flow", default)]
    pub free_cash_flow: Option<f64>,

    #[serde(rename = "stock_Price_Average", default)]
    pub stock_price_average: Option<f64>,
    #[serde(rename = "stock_Price_High", default)]
    pub stock_price_high: Option<f64>,
    #[serde(rename = "stock_Price_Low", default)]
    pub stock_price_low: Option<f64>,

    /// First day covered by the report.
    #[serde(rename = "report_Start_Date", with = "dates::opt_date", default)]
    pub report_start_date: Option<NaiveDate>,

    /// Last day covered by the report.
    #[serde(rename = "report_End_Date", with = "dates::opt_date", default)]
    pub report_end_date: Option<NaiveDate>,

    /// Date the report was published.
    #[serde(rename = "report_Date", with = "dates::opt_date", default)]
    pub report_date: Option<NaiveDate>,

    /// Whether the company uses a fiscal year other than the calendar year.
    #[serde(rename = "broken_Fiscal_Year", default)]
    pub broken_fiscal_year: bool,

    /// Report currency.
    #[serde(default)]
    pub currency: Option<String>,

    /// Conversion ratio from report currency to the instrument's price currency.
    #[serde(rename = "currency_Ratio", default)]
    pub currency_ratio: Option<f64>,
}

impl Report {
    /// Equity ratio (total equity over total assets), if both are known.
    pub fn equity_ratio(&self) -> Option<f64> {
        let assets = self.total_assets?;
        if assets == 0.0 {
            return None;
        }
        Some(self.total_equity? / assets)
    }

    /// Operating margin (operating income over revenues), if both are known.
    pub fn operating_margin(&self) -> Option<f64> {
        let revenues = self.revenues?;
        if revenues == 0.0 {
            return None;
        }
        Some(self.operating_income? / revenues)
    }
}

/// Query parameters for listing reports.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// Report granularity (sent as a path segment).
    #[serde(skip_serializing)]
    pub period: ReportPeriod,

    /// Maximum number of reports to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
}

impl ReportQuery {
    /// Create a query for one period kind.
    #[must_use]
    pub fn new(period: ReportPeriod) -> Self {
        Self {
            period,
            max_count: None,
        }
    }
}

/// Query type for report listing (instrument id, filters).
pub type InstrumentReportQuery = (u32, ReportQuery);

#[derive(Debug, Deserialize)]
struct ReportListResponse {
    #[serde(default)]
    reports: Option<Vec<Report>>,
}

#[async_trait]
impl List for Report {
    type Query = InstrumentReportQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &BorsdataClient, query: &Self::Query) -> Result<Vec<Self>> {
        let (ins_id, filters) = query;
        let path = format!("instruments/{ins_id}/reports/{}", filters.period);

        let data: ReportListResponse = client.get_json_with_query(&path, filters).await?;
        let mut reports = data.reports.unwrap_or_default();

        for report in &mut reports {
            report.kind = filters.period;
        }

        Ok(reports)
    }
}

/// Fetch the reports of one instrument for one period kind.
///
/// # Arguments
///
/// * `client` - The Börsdata API client
/// * `ins_id` - The instrument id
/// * `period` - Yearly, rolling twelve months or quarterly
pub async fn get_reports(
    client: &BorsdataClient,
    ins_id: u32,
    period: ReportPeriod,
) -> Result<Vec<Report>> {
    Report::list(client, &(ins_id, ReportQuery::new(period))).await
}
