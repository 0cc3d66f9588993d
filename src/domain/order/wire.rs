//! Wire types for order-book snapshot records.
//!
//! Field names follow the upstream camelCase JSON. Amounts stay as strings
//! here; `convert` parses them into big integers.

use crate::shared::{serde_util, OrderHash, TokenAddress};
use serde::{Deserialize, Serialize};

/// An order as delivered by order-book ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub hash: OrderHash,
    pub token_buy: TokenAddress,
    pub token_sell: TokenAddress,
    #[serde(with = "serde_util::amount")]
    pub amount_buy: String,
    #[serde(with = "serde_util::amount")]
    pub amount_sell: String,
    #[serde(default, with = "serde_util::opt_amount")]
    pub amount_buy_remaining: Option<String>,
    #[serde(default, with = "serde_util::opt_amount")]
    pub amount_sell_remaining: Option<String>,
    #[serde(default)]
    pub invalid: bool,
}

/// A submitted but unconfirmed fill against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTradeRecord {
    pub hash: OrderHash,
    #[serde(with = "serde_util::amount")]
    pub amount: String,
    #[serde(with = "serde_util::amount")]
    pub amount_sell_adjusted: String,
}

/// A submitted but unconfirmed cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingCancelRecord {
    pub hash: OrderHash,
}
