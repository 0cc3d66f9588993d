//! Order domain: raw orders and the pending intents that shadow them.

mod convert;
pub mod wire;

use crate::shared::{serde_util, OrderHash, TokenAddress};
use num_bigint::BigInt;
use num_traits::Zero;
use serde::Serialize;

// ─── Order ───────────────────────────────────────────────────────────────────

/// An on-chain order with amounts in each token's smallest unit.
///
/// `token_buy` is what the maker receives and `token_sell` what the maker
/// gives. The `*_remaining` overrides carry confirmed partial fills.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub hash: OrderHash,
    pub token_buy: TokenAddress,
    pub token_sell: TokenAddress,
    #[serde(with = "serde_util::big_int")]
    pub amount_buy: BigInt,
    #[serde(with = "serde_util::big_int")]
    pub amount_sell: BigInt,
    #[serde(with = "serde_util::opt_big_int")]
    pub amount_buy_remaining: Option<BigInt>,
    #[serde(with = "serde_util::opt_big_int")]
    pub amount_sell_remaining: Option<BigInt>,
    pub invalid: bool,
}

impl Order {
    /// Confirmed remaining buy amount: the override if present, else the full amount.
    pub fn remaining_buy(&self) -> &BigInt {
        self.amount_buy_remaining.as_ref().unwrap_or(&self.amount_buy)
    }

    /// Confirmed remaining sell amount: the override if present, else the full amount.
    pub fn remaining_sell(&self) -> &BigInt {
        self.amount_sell_remaining
            .as_ref()
            .unwrap_or(&self.amount_sell)
    }

    /// Whether the buy amount can serve as a price divisor.
    ///
    /// An absent override counts as nonzero, so an order with a zero
    /// `amount_buy` and no override still passes.
    pub fn has_buy_amount(&self) -> bool {
        !self.amount_buy.is_zero()
            || self
                .amount_buy_remaining
                .as_ref()
                .map_or(true, |r| !r.is_zero())
    }
}

// ─── PendingTrade ────────────────────────────────────────────────────────────

/// An in-flight fill not yet reflected in the order's remaining fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTrade {
    pub hash: OrderHash,
    /// Delta on the order's buy side.
    #[serde(with = "serde_util::big_int")]
    pub amount: BigInt,
    /// Delta on the order's sell side.
    #[serde(with = "serde_util::big_int")]
    pub amount_sell_adjusted: BigInt,
}

// ─── PendingCancel ───────────────────────────────────────────────────────────

/// An unconfirmed cancellation; the order is treated as already gone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PendingCancel {
    pub hash: OrderHash,
}
