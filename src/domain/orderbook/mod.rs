//! Orderbook domain: market inputs, enriched buy orders, depth total.

mod convert;
pub mod projection;
pub mod state;
pub mod wire;

pub use projection::{compute_buy_orders, compute_buy_total};
pub use state::BuyBookSelector;

use crate::config::{LOADING, UNPRICED};
use crate::domain::order::{Order, PendingCancel, PendingTrade};
use crate::domain::token::Token;
use crate::shared::fmt::group_thousands;
use crate::shared::serde_util;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

// ─── MarketState ─────────────────────────────────────────────────────────────

/// The six inputs of the buy-side projection.
///
/// List fields are shared snapshots: cloning a `MarketState` is cheap, and an
/// unchanged `Arc` lets [`BuyBookSelector`] skip the deep comparison.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketState {
    pub tokens: Arc<Vec<Token>>,
    /// Symbol of the token being bought.
    pub selected_market: String,
    pub orders: Arc<Vec<Order>>,
    pub pending_trades: Arc<Vec<PendingTrade>>,
    pub pending_cancels: Arc<Vec<PendingCancel>>,
    /// Symbol of the counter asset paid with.
    pub trade_for_market: String,
}

impl MarketState {
    pub fn new(tokens: Vec<Token>, selected_market: &str, trade_for_market: &str) -> Self {
        Self {
            tokens: Arc::new(tokens),
            selected_market: selected_market.to_string(),
            trade_for_market: trade_for_market.to_string(),
            ..Self::default()
        }
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = Arc::new(orders);
        self
    }

    pub fn with_pending_trades(mut self, trades: Vec<PendingTrade>) -> Self {
        self.pending_trades = Arc::new(trades);
        self
    }

    pub fn with_pending_cancels(mut self, cancels: Vec<PendingCancel>) -> Self {
        self.pending_cancels = Arc::new(cancels);
        self
    }
}

// ─── EnrichedOrder ───────────────────────────────────────────────────────────

/// A buy-side order with pending deltas applied, exact prices and running depth.
///
/// The `*_rational` fields hold unrounded values; the string fields are their
/// display renderings. An unpriced order has `price_rational == 0` and
/// `price == "N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedOrder {
    #[serde(flatten)]
    pub order: Order,
    #[serde(with = "serde_util::big_int")]
    pub pending_amount_get: BigInt,
    #[serde(with = "serde_util::big_int")]
    pub pending_amount_give: BigInt,
    #[serde(skip)]
    pub price_rational: BigRational,
    #[serde(skip)]
    pub buy_rational: BigRational,
    #[serde(skip)]
    pub sell_rational: BigRational,
    #[serde(skip)]
    pub sum_rational: BigRational,
    pub price: String,
    pub buy: String,
    pub sell: String,
    pub sum: String,
}

impl EnrichedOrder {
    pub fn is_priced(&self) -> bool {
        !self.price_rational.is_zero()
    }

    /// Price with thousands separators; `"N/A"` when unpriced.
    pub fn formatted_price(&self) -> String {
        if self.is_priced() {
            group_thousands(&self.price)
        } else {
            UNPRICED.to_string()
        }
    }

    /// Running depth with thousands separators.
    pub fn formatted_sum(&self) -> String {
        group_thousands(&self.sum)
    }
}

// ─── BuyTotal ────────────────────────────────────────────────────────────────

/// Total remaining sell-side liquidity of the buy book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuyTotal {
    /// The selected token's decimals are not known yet.
    Loading,
    Amount {
        value: BigRational,
        rendered: String,
    },
}

impl BuyTotal {
    pub fn as_str(&self) -> &str {
        match self {
            BuyTotal::Loading => LOADING,
            BuyTotal::Amount { rendered, .. } => rendered,
        }
    }

    pub fn value(&self) -> Option<&BigRational> {
        match self {
            BuyTotal::Loading => None,
            BuyTotal::Amount { value, .. } => Some(value),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, BuyTotal::Loading)
    }

    /// Total with thousands separators; `"Loading"` passes through.
    pub fn formatted(&self) -> String {
        group_thousands(self.as_str())
    }
}

impl fmt::Display for BuyTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for BuyTotal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
