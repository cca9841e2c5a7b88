/*
[INPUT]:  Market identifiers and query parameters
[OUTPUT]: Public market data envelopes (markets, tickers, order books, candles)
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing endpoint paths
*/

use crate::http::{BittrexClient, Result};
use crate::types::ApiOutcome;

impl BittrexClient {
    /// List all traded markets
    ///
    /// GET /public/getmarkets
    pub async fn get_markets(&self) -> Result<ApiOutcome> {
        self.public_call(&self.v1_url("/public/getmarkets"), None)
            .await
    }

    /// List all supported currencies
    ///
    /// GET /public/getcurrencies
    pub async fn get_currencies(&self) -> Result<ApiOutcome> {
        self.public_call(&self.v1_url("/public/getcurrencies"), None)
            .await
    }

    /// Current bid/ask/last for one market
    ///
    /// GET /public/getticker?market={market}
    pub async fn get_ticker(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.public_call(&self.v1_url("/public/getticker"), Some(params))
            .await
    }

    /// 24h summaries for every market
    ///
    /// GET /public/getmarketsummaries
    pub async fn get_market_summaries(&self) -> Result<ApiOutcome> {
        self.public_call(&self.v1_url("/public/getmarketsummaries"), None)
            .await
    }

    /// 24h summary for one market
    ///
    /// GET /public/getmarketsummary?market={market}
    pub async fn get_market_summary(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.public_call(&self.v1_url("/public/getmarketsummary"), Some(params))
            .await
    }

    /// Order book for one market
    ///
    /// GET /public/getorderbook?market={market}&type={type}
    pub async fn get_order_book(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.public_call(&self.v1_url("/public/getorderbook"), Some(params))
            .await
    }

    /// Recent trades for one market
    ///
    /// GET /public/getmarkethistory?market={market}
    pub async fn get_market_history(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.public_call(&self.v1_url("/public/getmarkethistory"), Some(params))
            .await
    }

    /// Candlestick data; served from the versioned API
    ///
    /// GET {v2}/pub/market/GetTicks?marketName={market}&tickInterval={interval}
    pub async fn get_candles(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.public_call(&self.v2_url("/pub/market/GetTicks"), Some(params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BittrexClient, ClientConfig};
    use crate::types::{ApiOutcome, ResponsePayload};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> BittrexClient {
        let config = ClientConfig {
            base_url: format!("{}/api/v1.1", server.uri()),
            base_url_v2: format!("{}/Api/v2.0", server.uri()),
            ..ClientConfig::default()
        };
        BittrexClient::with_config(config).expect("client init")
    }

    #[tokio::test]
    async fn test_get_markets_hits_bare_endpoint() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1.1/public/getmarkets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "",
                "result": [{ "MarketName": "BTC-LTC" }],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let outcome = client.get_markets().await.expect("get_markets failed");

        match outcome {
            ApiOutcome::Success(ResponsePayload::Object(envelope)) => {
                assert!(envelope.success);
                assert_eq!(envelope.result[0]["MarketName"], "BTC-LTC");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_ticker_passes_params_verbatim() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1.1/public/getticker"))
            .and(query_param("market", "BTC-LTC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "",
                "result": { "Bid": 0.0042, "Ask": 0.0043, "Last": 0.0042 },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let outcome = client
            .get_ticker(&[("market", "BTC-LTC")])
            .await
            .expect("get_ticker failed");
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_get_candles_uses_versioned_base_url() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/Api/v2.0/pub/market/GetTicks"))
            .and(query_param("marketName", "BTC-LTC"))
            .and(query_param("tickInterval", "oneMin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "",
                "result": [],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let outcome = client
            .get_candles(&[("marketName", "BTC-LTC"), ("tickInterval", "oneMin")])
            .await
            .expect("get_candles failed");
        assert!(outcome.is_success());
    }
}
