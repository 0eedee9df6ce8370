/*
[INPUT]:  Mock server URIs and blocking closures
[OUTPUT]: Clients and helpers for in-crate tests
[POS]:    HTTP layer - test support (cfg(test) only)
[UPDATE]: When test setup patterns change
*/

use crate::http::{ClientConfig, TradeOgreClient};

/// Client pointed at a wiremock server
pub(crate) fn mock_client(uri: &str) -> TradeOgreClient {
    TradeOgreClient::with_config_and_base_url(ClientConfig::default(), uri).expect("client init")
}

/// Run blocking client code off the async test runtime
pub(crate) async fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
