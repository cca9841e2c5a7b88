/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bittrex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    BittrexClient,
    BittrexError,
    ClientConfig,
    ConfigUpdate,
    Credentials,
    NonceLedger,
    RequestDescriptor,
    Result,
    SIGNATURE_HEADER,
    hmac_sha512_hex,
    merge_query_param,
};

// Re-export all types
pub use types::*;
