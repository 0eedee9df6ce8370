/*
[INPUT]:  Endpoint parameters from client methods
[OUTPUT]: URL-encoded form bodies (fields serialized in declaration order)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::Serialize;

/// POST /account/balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceForm<'a> {
    pub currency: &'a str,
}

/// POST /order/buy and /order/sell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderForm<'a> {
    pub market: &'a str,
    pub quantity: &'a str,
    pub price: &'a str,
}

/// POST /account/orders; an empty market lists every market
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersForm<'a> {
    pub market: &'a str,
}

/// POST /order/cancel; `"all"` cancels every open order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelForm<'a> {
    pub uuid: &'a str,
}
