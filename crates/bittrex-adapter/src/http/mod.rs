/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and normalized API outcomes
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod market;
pub mod nonce;
pub mod public;
pub mod query;
pub mod request;
pub mod signature;

pub use error::{BittrexError, Result};
pub use nonce::NonceLedger;
pub use query::merge_query_param;
pub use request::RequestDescriptor;
pub use signature::{SIGNATURE_HEADER, hmac_sha512_hex};

pub use client::{BittrexClient, ClientConfig, ConfigUpdate, Credentials};
