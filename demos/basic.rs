//! Basic example demonstrating the Börsdata API client.
//!
//! Run with:
//! ```
//! BORSDATA_API_KEY=your-key cargo run --example basic
//! ```

use borsdata::{BorsdataClient, InstrumentListQuery, ReportPeriod, StockPriceQuery};
use chrono::{Duration, Utc};

#[tokio::main]
async fn main() -> borsdata::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Börsdata client...");
    let client = BorsdataClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Markets ---");
    let markets = client.markets().await?;
    for market in markets.iter().filter(|m| m.is_trading_list()) {
        println!("  - {} ({})", market.name, market.id);
    }

    let Some(market) = markets.iter().find(|m| m.is_trading_list()) else {
        println!("No trading markets found");
        return Ok(());
    };

    println!("\n--- Instruments on {} ---", market.name);
    let query = InstrumentListQuery {
        markets: Some(vec![market.id]),
    };
    let instruments = client.instruments(&query).await?;
    println!("Found {} instruments", instruments.len());

    if let Some(instrument) = instruments.first() {
        println!("\n--- Last 30 days of {} ---", instrument.name);
        let to = Utc::now().date_naive();
        let from = to - Duration::days(30);
        let prices = client
            .stock_prices(instrument.ins_id, StockPriceQuery::between(from, to))
            .await?;
        for price in prices.iter().rev().take(5) {
            println!("  {}  close {:.2}", price.date, price.close);
        }

        println!("\n--- Yearly reports ---");
        let reports = client.reports(instrument.ins_id, ReportPeriod::Year).await?;
        for report in reports.iter().take(3) {
            let revenues = report
                .revenues
                .map(|r| format!("{r:.0}"))
                .unwrap_or_else(|| "n/a".to_string());
            println!("  {}: revenues {} {}", report.year, revenues, report.currency.as_deref().unwrap_or(""));
        }
    }

    println!("\nDone!");
    Ok(())
}
