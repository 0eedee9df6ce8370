/*
[INPUT]:  Market, quantity, price or order uuid plus optional per-call credentials
[OUTPUT]: Order placement and cancellation results
[POS]:    HTTP layer - trading endpoints (require Basic auth)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use serde_json::Value;
use tracing::info;

use crate::auth::Credentials;
use crate::http::{Result, TradeOgreClient};
use crate::types::{CancelForm, OrderForm, Side};

impl TradeOgreClient {
    /// Submit a buy order
    ///
    /// POST /order/buy
    pub fn buy(
        &mut self,
        market: &str,
        quantity: &str,
        price: &str,
        auth: Option<&Credentials>,
    ) -> Result<Value> {
        self.place_order(Side::Buy, market, quantity, price, auth)
    }

    /// Submit a sell order
    ///
    /// POST /order/sell
    pub fn sell(
        &mut self,
        market: &str,
        quantity: &str,
        price: &str,
        auth: Option<&Credentials>,
    ) -> Result<Value> {
        self.place_order(Side::Sell, market, quantity, price, auth)
    }

    /// Submit an order on either side
    ///
    /// Quantity and price go on the wire exactly as given. A body with
    /// `success: false` is returned as data; an unfilled remainder is placed
    /// on the book and the body carries its `uuid`.
    pub fn place_order(
        &mut self,
        side: Side,
        market: &str,
        quantity: &str,
        price: &str,
        auth: Option<&Credentials>,
    ) -> Result<Value> {
        let builder = self
            .private_request(Method::POST, side.endpoint(), auth)?
            .form(&OrderForm {
                market,
                quantity,
                price,
            });
        info!(?side, market, quantity, price, "submitting order");
        self.send_json(builder)
    }

    /// Cancel an order by uuid; `"all"` cancels every order on every market
    ///
    /// POST /order/cancel
    pub fn cancel(&mut self, uuid: &str, auth: Option<&Credentials>) -> Result<Value> {
        let builder = self
            .private_request(Method::POST, "/order/cancel", auth)?
            .form(&CancelForm { uuid });
        info!(uuid, "cancelling order");
        self.send_json(builder)
    }
}
