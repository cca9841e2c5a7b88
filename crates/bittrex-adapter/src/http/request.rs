/*
[INPUT]:  Endpoint URI, signature and timeout settings
[OUTPUT]: Transient descriptor of one fully-formed HTTP request
[POS]:    HTTP layer - request construction
[UPDATE]: When adding headers or changing descriptor defaults
*/

use reqwest::Method;
use std::time::Duration;

/// User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; Bittrex API adapter)";

/// Content type the upstream expects even on GET requests.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One fully-formed request, built fresh per call and discarded after
/// dispatch. The URI already contains every query parameter; for credentialed
/// calls `apisign` holds the signature computed over those exact URI bytes.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub uri: String,
    pub apisign: Option<String>,
    pub timeout: Duration,
}

impl RequestDescriptor {
    /// Default descriptor: GET, standard headers, unsigned.
    pub fn get(uri: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::GET,
            uri: uri.into(),
            apisign: None,
            timeout,
        }
    }
}
