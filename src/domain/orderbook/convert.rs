//! Conversion: MarketSnapshot → MarketState (TryFrom + amount validation).

use super::wire;
use super::MarketState;
use crate::domain::order::{Order, PendingCancel, PendingTrade};
use crate::error::BookError;
use std::sync::Arc;

impl TryFrom<wire::MarketSnapshot> for MarketState {
    type Error = BookError;

    fn try_from(snapshot: wire::MarketSnapshot) -> Result<Self, Self::Error> {
        let orders = snapshot
            .orders
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let pending_trades = snapshot
            .pending_trades
            .into_iter()
            .map(PendingTrade::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let pending_cancels = snapshot
            .pending_cancels
            .into_iter()
            .map(PendingCancel::from)
            .collect::<Vec<_>>();

        Ok(MarketState {
            tokens: Arc::new(snapshot.tokens),
            selected_market: snapshot.selected_market,
            orders: Arc::new(orders),
            pending_trades: Arc::new(pending_trades),
            pending_cancels: Arc::new(pending_cancels),
            trade_for_market: snapshot.trade_for_market,
        })
    }
}

impl MarketState {
    /// Parse a JSON market snapshot and validate every amount.
    pub fn from_json(json: &str) -> Result<Self, BookError> {
        let snapshot: wire::MarketSnapshot = serde_json::from_str(json)?;
        Self::try_from(snapshot)
    }
}
