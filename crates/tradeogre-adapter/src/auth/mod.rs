/*
[INPUT]:  API key/secret pairs from callers or key files
[OUTPUT]: Resolved Basic auth credentials and credential errors
[POS]:    Auth layer - handles TradeOgre API authentication
[UPDATE]: When credential sources or resolution rules change
*/

pub mod credentials;
pub mod key_file;

pub use credentials::Credentials;
pub use key_file::{read_key_file, write_key_file};
