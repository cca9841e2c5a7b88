/*
[INPUT]:  Account query and withdrawal parameters
[OUTPUT]: Account envelopes (balances, histories, deposit addresses)
[POS]:    HTTP layer - account endpoints (credentialed, signed)
[UPDATE]: When adding new account endpoints or changing endpoint paths
*/

use crate::http::{BittrexClient, Result};
use crate::types::ApiOutcome;

impl BittrexClient {
    /// All currency balances. Always issued with an empty parameter set.
    ///
    /// GET /account/getbalances
    pub async fn get_balances(&self) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/getbalances"), &[])
            .await
    }

    /// Balance for one currency
    ///
    /// GET /account/getbalance?currency={currency}
    pub async fn get_balance(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/getbalance"), params)
            .await
    }

    /// Withdrawal history, optionally filtered by currency
    ///
    /// GET /account/getwithdrawalhistory?currency={currency}
    pub async fn get_withdrawal_history(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/getwithdrawalhistory"), params)
            .await
    }

    /// Deposit address for one currency
    ///
    /// GET /account/getdepositaddress?currency={currency}
    pub async fn get_deposit_address(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/getdepositaddress"), params)
            .await
    }

    /// Deposit history, optionally filtered by currency
    ///
    /// GET /account/getdeposithistory?currency={currency}
    pub async fn get_deposit_history(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/getdeposithistory"), params)
            .await
    }

    /// Order history; parameters are optional and default to the empty set
    ///
    /// GET /account/getorderhistory?market={market}
    pub async fn get_order_history(&self, params: Option<&[(&str, &str)]>) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/getorderhistory"), params.unwrap_or(&[]))
            .await
    }

    /// One order by uuid
    ///
    /// GET /account/getorder?uuid={uuid}
    pub async fn get_order(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/getorder"), params)
            .await
    }

    /// Withdraw funds
    ///
    /// GET /account/withdraw?currency={currency}&quantity={qty}&address={address}
    pub async fn withdraw(&self, params: &[(&str, &str)]) -> Result<ApiOutcome> {
        self.credential_call(&self.v1_url("/account/withdraw"), params)
            .await
    }
}
