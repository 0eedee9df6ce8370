/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tradeogre-adapter tests

use std::env;
use std::fs;
use std::path::PathBuf;

use tradeogre_adapter::{ClientConfig, TradeOgreClient};
use uuid::Uuid;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn mock_client(uri: &str) -> TradeOgreClient {
    TradeOgreClient::with_config_and_base_url(ClientConfig::default(), uri).expect("client init")
}

/// The blocking client must not run on the async test runtime
pub async fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// Fresh scratch directory under the system temp dir
#[allow(dead_code)]
pub fn temp_dir() -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("tradeogre-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}
