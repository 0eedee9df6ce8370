/*
[INPUT]:  Key file path and order parameters
[OUTPUT]: Balances, open orders, order placement/cancellation results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tradeogre_adapter::*;

/// Example: Trading operations (requires a key file)
///
/// Usage: cargo run --example trading_example -- KEYFILE [MARKET QUANTITY PRICE]
///
/// The key file holds the API key on line 1 and the secret on line 2. When
/// order parameters are given a buy order is placed and immediately cancelled.
fn main() -> Result<()> {
    init_tracing("info")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(key_path) = args.first() else {
        bail!("usage: trading_example KEYFILE [MARKET QUANTITY PRICE]");
    };

    let mut client = TradeOgreClient::new().context("create client")?;
    client.load_key(key_path).context("load key file")?;

    let balances = client.balances(None).context("balances")?;
    report("balances", &balances);

    let orders = client.orders(None, None).context("open orders")?;
    report("open orders", &orders);

    if let [_, market, quantity, price] = args.as_slice() {
        let placed = client.buy(market, quantity, price, None).context("buy")?;
        report("buy", &placed);

        match placed.get("uuid").and_then(Value::as_str) {
            Some(uuid) => {
                let cancelled = client.cancel(uuid, None).context("cancel")?;
                report("cancel", &cancelled);
            }
            None => info!("order filled immediately or was rejected; nothing to cancel"),
        }
    }

    Ok(())
}

/// Application-level failures arrive as `success: false` bodies, not errors
fn report(label: &str, body: &Value) {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let reason = body.get("error").and_then(Value::as_str).unwrap_or("unknown");
        warn!(label, reason, "exchange rejected request");
    }
    println!("{label}: {body}");
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
