/*
[INPUT]:  Market identifiers such as "BTC-XMR"
[OUTPUT]: Market data (market list, order book, ticker, trade history)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::{Result, TradeOgreClient};

impl TradeOgreClient {
    /// List every market with price, volume, high, low, bid and ask
    ///
    /// GET /markets
    pub fn markets(&mut self) -> Result<Value> {
        let builder = self.public_request(Method::GET, "/markets")?;
        self.send_json(builder)
    }

    /// Current order book for a market
    ///
    /// GET /orders/{market}
    pub fn order_book(&mut self, market: &str) -> Result<Value> {
        let endpoint = format!("/orders/{market}");
        let builder = self.public_request(Method::GET, &endpoint)?;
        self.send_json(builder)
    }

    /// 24h ticker for a market; `initialprice` is the price 24 hours ago
    ///
    /// GET /ticker/{market}
    pub fn ticker(&mut self, market: &str) -> Result<Value> {
        let endpoint = format!("/ticker/{market}");
        let builder = self.public_request(Method::GET, &endpoint)?;
        self.send_json(builder)
    }

    /// Last 100 trades on a market, dates as Unix UTC timestamps
    ///
    /// GET /history/{market}
    pub fn history(&mut self, market: &str) -> Result<Value> {
        let endpoint = format!("/history/{market}");
        let builder = self.public_request(Method::GET, &endpoint)?;
        self.send_json(builder)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::TradeOgreError;
    use crate::http::testing::{mock_client, run_blocking};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test(flavor = "multi_thread")]
    async fn test_markets() {
        let server = MockServer::start().await;
        let body = json!([
            {"BTC-XMR": {"initialprice": "0.00400000", "price": "0.00420000", "high": "0.00430000",
                         "low": "0.00390000", "volume": "1.23", "bid": "0.00410000", "ask": "0.00420000"}},
            {"BTC-LTC": {"initialprice": "0.00900000", "price": "0.00910000", "high": "0.00920000",
                         "low": "0.00880000", "volume": "0.50", "bid": "0.00900000", "ask": "0.00910000"}}
        ]);

        Mock::given(method("GET"))
            .and(path("/markets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response = run_blocking(move || mock_client(&uri).markets())
            .await
            .expect("markets failed");

        assert_eq!(response, body);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_order_book() {
        let server = MockServer::start().await;
        let body = json!({
            "success": "true",
            "buy": {"0.00410000": "12.5", "0.00400000": "3.1"},
            "sell": {"0.00420000": "7.0"}
        });

        Mock::given(method("GET"))
            .and(path("/orders/BTC-XMR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response = run_blocking(move || mock_client(&uri).order_book("BTC-XMR"))
            .await
            .expect("order_book failed");

        assert_eq!(response, body);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_ticker_sends_no_credentials() {
        let server = MockServer::start().await;
        let body = json!({
            "success": true,
            "initialprice": "0.00400000",
            "price": "0.00420000",
            "high": "0.00430000",
            "low": "0.00390000",
            "volume": "1.23000000"
        });

        Mock::given(method("GET"))
            .and(path("/ticker/BTC-XMR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response = run_blocking(move || {
            let mut client = mock_client(&uri);
            client.set_credentials(Credentials::new("k", "s"));
            client.ticker("BTC-XMR")
        })
        .await
        .expect("ticker failed");

        assert_eq!(response, body);

        let requests = server.received_requests().await.expect("request recording");
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_history() {
        let server = MockServer::start().await;
        let body = json!([
            {"date": 1_700_000_000, "type": "buy", "price": "0.00420000", "quantity": "1.5"},
            {"date": 1_700_000_060, "type": "sell", "price": "0.00410000", "quantity": "0.2"}
        ]);

        Mock::given(method("GET"))
            .and(path("/history/BTC-XMR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response = run_blocking(move || mock_client(&uri).history("BTC-XMR"))
            .await
            .expect("history failed");

        assert_eq!(response, body);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_error_status_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ticker/NOPE-NOPE"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, last) = run_blocking(move || {
            let mut client = mock_client(&uri);
            let result = client.ticker("NOPE-NOPE");
            (result, client.last_response().cloned())
        })
        .await;

        match result {
            Err(TradeOgreError::Api { code, message }) => {
                assert_eq!(code, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
        assert!(last.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_malformed_json_is_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/markets"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = run_blocking(move || mock_client(&uri).markets()).await;

        assert!(matches!(result, Err(TradeOgreError::Serialization(_))));
    }
}
