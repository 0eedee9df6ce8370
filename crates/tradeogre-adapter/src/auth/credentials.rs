/*
[INPUT]:  Stored credentials and optional per-call override
[OUTPUT]: Effective (key, secret) pair for Basic auth
[POS]:    Auth layer - credential model and fallback policy
[UPDATE]: When credential resolution rules change
*/

use std::fmt;

use crate::http::{Result, TradeOgreError};

/// API key and secret, either of which may be absent
///
/// A half-set pair is a valid state; it only fails once an authenticated
/// endpoint tries to use it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub key: Option<String>,
    pub secret: Option<String>,
}

impl Credentials {
    /// Create a complete key/secret pair
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            secret: Some(secret.into()),
        }
    }

    /// Create credentials from possibly-missing parts
    pub fn from_parts(key: Option<String>, secret: Option<String>) -> Self {
        Self { key, secret }
    }

    /// Key and secret, if both are set
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (&self.key, &self.secret) {
            (Some(key), Some(secret)) => Some((key.as_str(), secret.as_str())),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.pair().is_some()
    }

    /// Pick the pair an authenticated call should use
    ///
    /// A complete `overriding` pair wins. Anything less falls back to `self`
    /// as a whole; the two sources are never mixed.
    pub fn resolve<'a>(&'a self, overriding: Option<&'a Credentials>) -> Result<(&'a str, &'a str)> {
        overriding
            .and_then(Credentials::pair)
            .or_else(|| self.pair())
            .ok_or(TradeOgreError::MissingCredentials)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
