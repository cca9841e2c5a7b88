/*
[INPUT]:  Order placement and cancellation parameters
[OUTPUT]: Order-side envelopes (order ids, cancellation confirmations)
[POS]:    HTTP layer - market endpoints (credentialed, signed)
[UPDATE]: When adding new trading endpoints or changing endpoint paths
*/

use crate::http::{BittrexClient, Result};
use crate::types::ApiOutcome;

impl BittrexClient {
    /// Place a limit buy order
    ///
    /// GET /market/buylimit?market={market}&quantity={qty}&rate={rate}
    pub async fn buy_limit(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/market/buylimit"), params)
            .await
    }

    /// Place a market buy order
    ///
    /// GET /market/buymarket?market={market}&quantity={qty}
    pub async fn buy_market(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/market/buymarket"), params)
            .await
    }

    /// Place a limit sell order
    ///
    /// GET /market/selllimit?market={market}&quantity={qty}&rate={rate}
    pub async fn sell_limit(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/market/selllimit"), params)
            .await
    }

    /// Place a market sell order
    ///
    /// GET /market/sellmarket?market={market}&quantity={qty}
    pub async fn sell_market(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/market/sellmarket"), params)
            .await
    }

    /// Place a buy order through the versioned trade endpoint
    ///
    /// GET {v2}/key/market/TradeBuy
    pub async fn trade_buy(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v2_url("/key/market/TradeBuy"), params)
            .await
    }

    /// Place a sell order through the versioned trade endpoint
    ///
    /// GET {v2}/key/market/TradeSell
    pub async fn trade_sell(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v2_url("/key/market/TradeSell"), params)
            .await
    }

    /// Cancel an open order
    ///
    /// GET /market/cancel?uuid={uuid}
    pub async fn cancel(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/market/cancel"), params)
            .await
    }

    /// List open orders, optionally filtered by market
    ///
    /// GET /market/getopenorders?market={market}
    pub async fn get_open_orders(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/market/getopenorders"), params)
            .await
    }
}
