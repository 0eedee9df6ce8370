/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured blocking reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::auth::{Credentials, read_key_file};
use crate::http::{Result, TradeOgreError};

/// Base URL for the TradeOgre v1 API
pub const DEFAULT_BASE_URL: &str = "https://tradeogre.com/api/v1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("tradeogre-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for the TradeOgre API
///
/// Holds optional credentials and the body of the most recent successful
/// call. Every endpoint takes `&mut self` because it overwrites that slot.
#[derive(Debug)]
pub struct TradeOgreClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    last_response: Option<Value>,
}

impl TradeOgreClient {
    /// Create a new client with default configuration and no credentials
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with default configuration and stored credentials
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        let mut client = Self::new()?;
        client.credentials = credentials;
        Ok(client)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a different base URL (mock servers, proxies)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| TradeOgreError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials: Credentials::default(),
            last_response: None,
        })
    }

    /// Base URL every endpoint path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replace stored credentials
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Get stored credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Load key (line 1) and secret (line 2) from a file into stored credentials
    pub fn load_key(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.credentials = read_key_file(path)?;
        info!(path = %path.display(), "loaded credentials from key file");
        Ok(())
    }

    /// Body of the most recent successful call
    pub fn last_response(&self) -> Option<&Value> {
        self.last_response.as_ref()
    }

    /// Take the most recent body, leaving the slot empty
    pub fn take_last_response(&mut self) -> Option<Value> {
        self.last_response.take()
    }

    /// Build full URL for an endpoint path such as `/ticker/BTC-XMR`
    ///
    /// Concatenated rather than joined so the `/api/v1` prefix survives.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{endpoint}"))?)
    }

    /// Build request builder for public endpoints; never carries credentials
    pub(crate) fn public_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%method, path = url.path(), authenticated = false, "sending request");
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder for private endpoints with Basic auth
    ///
    /// Fails with [`TradeOgreError::MissingCredentials`] before any I/O when
    /// neither `auth` nor the stored credentials hold a complete pair.
    pub(crate) fn private_request(
        &self,
        method: Method,
        endpoint: &str,
        auth: Option<&Credentials>,
    ) -> Result<RequestBuilder> {
        let (key, secret) = self.credentials.resolve(auth)?;
        let url = self.endpoint_url(endpoint)?;
        debug!(%method, path = url.path(), authenticated = true, "sending request");
        Ok(self
            .http_client
            .request(method, url)
            .basic_auth(key, Some(secret)))
    }

    /// Execute a request, decode the JSON body and record it as the last response
    pub(crate) fn send_json(&mut self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            warn!(status = status.as_u16(), "request returned non-success status");
            return Err(TradeOgreError::api_error(status, body));
        }

        let value: Value = serde_json::from_str(&body)?;
        self.last_response = Some(value.clone());
        Ok(value)
    }
}
