/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Decoded JSON responses from the TradeOgre REST API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod public;
pub mod trade;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Result, TradeOgreError};

pub use client::{ClientConfig, DEFAULT_BASE_URL, TradeOgreClient};
