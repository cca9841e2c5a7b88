/*
[INPUT]:  HTTP configuration (base URLs, credentials, output flags, timeout)
[OUTPUT]: Configured reqwest client and parsed API outcomes
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::nonce::NonceLedger;
use crate::http::query::merge_query_param;
use crate::http::request::{DEFAULT_USER_AGENT, FORM_CONTENT_TYPE, RequestDescriptor};
use crate::http::signature::{SIGNATURE_HEADER, hmac_sha512_hex};
use crate::http::{BittrexError, Result};
use crate::types::{ApiOutcome, ApiResponse, ResponsePayload};
use reqwest::header;
use reqwest::{Client, Url};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Default base URLs for the Bittrex REST API
const BASE_URL: &str = "https://bittrex.com/api/v1.1";
const BASE_URL_V2: &str = "https://bittrex.com/Api/v2.0";
const WEBSOCKET_BASE_URL: &str = "wss://socket.bittrex.com/signalr";

/// Client configuration.
///
/// None of the fields are validated; a later write silently replaces an
/// earlier one, and bad credentials only surface as an upstream failure.
/// The `websocket_*` fields belong to the separate push-notification
/// subsystem and are carried here only as configuration surface.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub base_url_v2: String,
    pub websocket_base_url: String,
    pub websocket_hubs: Vec<String>,
    pub websocket_auto_reconnect: bool,
    pub api_key: String,
    pub api_secret: String,
    /// Log request URI and elapsed time after each completed call.
    pub verbose: bool,
    /// Deliver successful envelopes as serialized text instead of structured data.
    pub cleartext: bool,
    /// Swap the (data, error) callback argument pair to (error, data).
    pub inverse_callback_arguments: bool,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            base_url_v2: BASE_URL_V2.to_string(),
            websocket_base_url: WEBSOCKET_BASE_URL.to_string(),
            websocket_hubs: vec!["CoreHub".to_string()],
            websocket_auto_reconnect: true,
            api_key: String::new(),
            api_secret: String::new(),
            verbose: false,
            cleartext: false,
            inverse_callback_arguments: false,
            request_timeout_secs: 15,
        }
    }
}

/// Bulk configuration update. Every populated field overwrites the current
/// value; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub base_url: Option<String>,
    pub base_url_v2: Option<String>,
    pub websocket_base_url: Option<String>,
    pub websocket_hubs: Option<Vec<String>>,
    pub websocket_auto_reconnect: Option<bool>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub verbose: Option<bool>,
    pub cleartext: Option<bool>,
    pub inverse_callback_arguments: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

/// API key and secret for credentialed requests.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

/// Main HTTP client for the Bittrex REST API.
///
/// Each endpoint method issues one asynchronous HTTP exchange; calls in
/// flight concurrently complete in no particular order. Configuration changes
/// take effect for subsequently initiated calls only.
#[derive(Debug)]
pub struct BittrexClient {
    http_client: Client,
    config: ClientConfig,
    nonces: Mutex<NonceLedger>,
}

impl BittrexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            config,
            nonces: Mutex::new(NonceLedger::new()),
        })
    }

    /// Current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Apply a bulk configuration update. Affects calls initiated afterwards,
    /// not calls already in flight.
    pub fn apply_options(&mut self, update: ConfigUpdate) {
        let config = &mut self.config;
        macro_rules! overwrite {
            ($($field:ident),+ $(,)?) => {
                $(if let Some(value) = update.$field {
                    config.$field = value;
                })+
            };
        }
        overwrite!(
            base_url,
            base_url_v2,
            websocket_base_url,
            websocket_hubs,
            websocket_auto_reconnect,
            api_key,
            api_secret,
            verbose,
            cleartext,
            inverse_callback_arguments,
            request_timeout_secs,
        );
    }

    /// Set API key and secret for credentialed requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.config.api_key = credentials.api_key;
        self.config.api_secret = credentials.api_secret;
    }

    /// Decompose an outcome into the callback argument pair dictated by the
    /// configured `inverse_callback_arguments` flag.
    pub fn callback_args(
        &self,
        outcome: ApiOutcome,
    ) -> (Option<ResponsePayload>, Option<ResponsePayload>) {
        outcome.into_callback_args(self.config.inverse_callback_arguments)
    }

    /// Send an arbitrary request URI, optionally signed, bypassing the
    /// endpoint catalogue.
    pub async fn send_custom_request(&self, uri: &str, signed: bool) -> Result<ApiOutcome> {
        let descriptor = if signed {
            self.build_signed_request(uri, &[])
        } else {
            self.build_public_request(uri, None)
        };
        self.dispatch(descriptor).await
    }

    pub(crate) fn v1_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub(crate) fn v2_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url_v2, path)
    }

    fn next_nonce(&self) -> u64 {
        let now_ms = chrono::Utc::now().timestamp_millis() as u64;
        let mut ledger = self.nonces.lock().unwrap_or_else(PoisonError::into_inner);
        ledger.next(now_ms)
    }

    /// Merge caller parameters into a URI, in the order given, verbatim.
    fn merge_params(mut uri: String, params: &[(&str, &str)]) -> String {
        for (key, value) in params {
            uri = merge_query_param(&uri, key, value);
        }
        uri
    }

    /// Build an unsigned request. With parameters the same merge procedure as
    /// signed requests is used, without the credential or signature step;
    /// without parameters the bare endpoint URI is taken as-is.
    pub(crate) fn build_public_request(
        &self,
        uri: &str,
        params: Option<&[(&str, &str)]>,
    ) -> RequestDescriptor {
        let timeout = Duration::from_secs(self.config.request_timeout_secs);
        match params {
            None => RequestDescriptor::get(uri, timeout),
            Some(params) => {
                RequestDescriptor::get(Self::merge_params(uri.to_string(), params), timeout)
            }
        }
    }

    /// Build a credentialed request: `apikey` and `nonce` are merged first,
    /// then the caller's parameters in the order given, and the signature is
    /// computed over the exact final URI string.
    pub(crate) fn build_signed_request(
        &self,
        uri: &str,
        params: &[(&str, &str)],
    ) -> RequestDescriptor {
        let nonce = self.next_nonce().to_string();
        let mut signed_uri = merge_query_param(uri, "apikey", &self.config.api_key);
        signed_uri = merge_query_param(&signed_uri, "nonce", &nonce);
        signed_uri = Self::merge_params(signed_uri, params);

        let signature = hmac_sha512_hex(&signed_uri, &self.config.api_secret);
        tracing::debug!(uri = %signed_uri, "built signed request");

        let mut descriptor = RequestDescriptor::get(
            signed_uri,
            Duration::from_secs(self.config.request_timeout_secs),
        );
        descriptor.apisign = Some(signature);
        descriptor
    }

    /// Issue one public (unauthenticated) API call.
    pub(crate) async fn public_call(
        &self,
        uri: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<ApiOutcome> {
        self.dispatch(self.build_public_request(uri, params)).await
    }

    /// Issue one credentialed (signed) API call.
    pub(crate) async fn credential_call(
        &self,
        uri: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiOutcome> {
        self.dispatch(self.build_signed_request(uri, params)).await
    }

    /// Execute a request descriptor and normalize the response.
    ///
    /// Transport and decode failures are logged and returned as errors; the
    /// reference implementation dropped them silently after logging, which
    /// left the caller without any completion signal.
    pub(crate) async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<ApiOutcome> {
        let url = Url::parse(&descriptor.uri)?;
        let started = Instant::now();

        let mut builder = self
            .http_client
            .request(descriptor.method.clone(), url)
            .timeout(descriptor.timeout)
            .header(header::USER_AGENT, DEFAULT_USER_AGENT)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE);
        if let Some(signature) = &descriptor.apisign {
            builder = builder.header(SIGNATURE_HEADER, signature.as_str());
        }

        let response = builder.send().await.map_err(|err| {
            tracing::error!(uri = %descriptor.uri, error = %err, "transport failure");
            BittrexError::from(err)
        })?;
        let envelope: ApiResponse = response.json().await.map_err(|err| {
            tracing::error!(uri = %descriptor.uri, error = %err, "response body is not a valid envelope");
            BittrexError::from(err)
        })?;

        if self.config.verbose {
            tracing::info!(
                uri = %descriptor.uri,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request completed"
            );
        }

        if !envelope.success {
            return Ok(ApiOutcome::Failure(envelope));
        }
        let payload = if self.config.cleartext {
            ResponsePayload::Cleartext(serde_json::to_string(&envelope)?)
        } else {
            ResponsePayload::Object(envelope)
        };
        Ok(ApiOutcome::Success(payload))
    }
}
