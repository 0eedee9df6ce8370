/*
[INPUT]:  Currency, order uuid or market filter plus optional per-call credentials
[OUTPUT]: Account data (balances, single order, open orders)
[POS]:    HTTP layer - account endpoints (require Basic auth)
[UPDATE]: When adding new account endpoints or changing form fields
*/

// ### Account Endpoints

use reqwest::Method;
use serde_json::Value;

use crate::auth::Credentials;
use crate::http::{Result, TradeOgreClient};
use crate::types::{BalanceForm, OrdersForm};

impl TradeOgreClient {
    /// Total and available balance of one currency such as "BTC"
    ///
    /// POST /account/balance
    pub fn balance(&mut self, currency: &str, auth: Option<&Credentials>) -> Result<Value> {
        let builder = self
            .private_request(Method::POST, "/account/balance", auth)?
            .form(&BalanceForm { currency });
        self.send_json(builder)
    }

    /// All balances on the account
    ///
    /// GET /account/balances
    pub fn balances(&mut self, auth: Option<&Credentials>) -> Result<Value> {
        let builder = self.private_request(Method::GET, "/account/balances", auth)?;
        self.send_json(builder)
    }

    /// A single order by uuid
    ///
    /// GET /account/order/{uuid}
    pub fn order(&mut self, uuid: &str, auth: Option<&Credentials>) -> Result<Value> {
        let endpoint = format!("/account/order/{uuid}");
        let builder = self.private_request(Method::GET, &endpoint, auth)?;
        self.send_json(builder)
    }

    /// Active orders, on one market or (with `None`) on every market
    ///
    /// POST /account/orders
    pub fn orders(&mut self, market: Option<&str>, auth: Option<&Credentials>) -> Result<Value> {
        let builder = self
            .private_request(Method::POST, "/account/orders", auth)?
            .form(&OrdersForm {
                market: market.unwrap_or_default(),
            });
        self.send_json(builder)
    }
}
