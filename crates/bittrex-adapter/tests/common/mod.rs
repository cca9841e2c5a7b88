/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bittrex-adapter tests

use bittrex_adapter::{BittrexClient, ClientConfig};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration pointed at a mock server, with test credentials
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}/api/v1.1", server.uri()),
        base_url_v2: format!("{}/Api/v2.0", server.uri()),
        api_key: TEST_API_KEY.to_string(),
        api_secret: TEST_API_SECRET.to_string(),
        ..ClientConfig::default()
    }
}

/// Client wired to a mock server
pub fn test_client(server: &MockServer) -> BittrexClient {
    BittrexClient::with_config(test_config(server)).expect("client init")
}

/// Standard success envelope body
pub fn success_body(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": "",
        "result": result,
    })
}

/// Standard failure envelope body
#[allow(dead_code)]
pub fn failure_body(message: &str) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "message": message,
        "result": null,
    })
}
