/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public TradeOgre adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, read_key_file, write_key_file};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_BASE_URL,
    Result,
    TradeOgreClient,
    TradeOgreError,
};

// Re-export all types
pub use types::*;
