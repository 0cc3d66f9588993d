//! Wire type for the full market snapshot held by the app state store.

use crate::domain::order::wire::{OrderRecord, PendingCancelRecord, PendingTradeRecord};
use crate::domain::token::Token;
use serde::{Deserialize, Serialize};

/// The six projection inputs in their upstream JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    #[serde(default)]
    pub tokens: Vec<Token>,
    pub selected_market: String,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub pending_trades: Vec<PendingTradeRecord>,
    #[serde(default)]
    pub pending_cancels: Vec<PendingCancelRecord>,
    pub trade_for_market: String,
}
