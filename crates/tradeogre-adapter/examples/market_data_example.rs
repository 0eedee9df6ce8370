/*
[INPUT]:  Market identifier (e.g., "BTC-XMR")
[OUTPUT]: Market data (market list, ticker, order book, trade history)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tradeogre_adapter::*;

/// Example: Query market data (no authentication required)
///
/// Usage: cargo run --example market_data_example -- [MARKET]
fn main() -> Result<()> {
    init_tracing("info")?;

    let market = std::env::args().nth(1).unwrap_or_else(|| "BTC-XMR".to_string());
    let mut client = TradeOgreClient::new().context("create client")?;
    info!(%market, "client created (no auth required for public endpoints)");

    let markets = client.markets().context("markets")?;
    let count = markets.as_array().map(Vec::len).unwrap_or_default();
    println!("{count} markets listed");

    let ticker = client.ticker(&market).context("ticker")?;
    println!("Ticker {market}: {ticker}");

    let book = client.order_book(&market).context("order book")?;
    let bids = book.get("buy").and_then(|v| v.as_object()).map(|m| m.len());
    let asks = book.get("sell").and_then(|v| v.as_object()).map(|m| m.len());
    println!("Order book {market}: {bids:?} bid levels, {asks:?} ask levels");

    let history = client.history(&market).context("history")?;
    let trades = history.as_array().map(Vec::len).unwrap_or_default();
    println!("History {market}: {trades} recent trades");

    if let Some(last) = client.last_response() {
        info!(bytes = last.to_string().len(), "last response retained");
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
