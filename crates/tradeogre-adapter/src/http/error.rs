/*
[INPUT]:  Error sources (HTTP, API status, serialization, credentials, key file)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the TradeOgre adapter
#[derive(Error, Debug)]
pub enum TradeOgreError {
    /// Authenticated endpoint called without a usable key/secret pair
    #[error("Either key or secret is not set (use `load_key()` or pass credentials)")]
    MissingCredentials,

    /// Credential file could not be read or written
    #[error("Key file {}: {}", .path.display(), .source)]
    KeyFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TradeOgreError {
    /// Check if error indicates missing or rejected credentials
    pub fn is_auth_error(&self) -> bool {
        match self {
            TradeOgreError::MissingCredentials => true,
            TradeOgreError::Api { code, .. } => *code == 401 || *code == 403,
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TradeOgreError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }

    pub(crate) fn key_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TradeOgreError::KeyFile {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for TradeOgre operations
pub type Result<T> = std::result::Result<T, TradeOgreError>;
