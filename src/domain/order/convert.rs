//! Conversions: wire records → order domain types.

use super::wire;
use super::{Order, PendingCancel, PendingTrade};
use crate::error::BookError;
use crate::shared::parse_amount;

impl TryFrom<wire::OrderRecord> for Order {
    type Error = BookError;

    fn try_from(record: wire::OrderRecord) -> Result<Self, Self::Error> {
        let amount_buy_remaining = record
            .amount_buy_remaining
            .as_deref()
            .map(|v| parse_amount("amountBuyRemaining", v))
            .transpose()?;
        let amount_sell_remaining = record
            .amount_sell_remaining
            .as_deref()
            .map(|v| parse_amount("amountSellRemaining", v))
            .transpose()?;

        Ok(Order {
            amount_buy: parse_amount("amountBuy", &record.amount_buy)?,
            amount_sell: parse_amount("amountSell", &record.amount_sell)?,
            amount_buy_remaining,
            amount_sell_remaining,
            hash: record.hash,
            token_buy: record.token_buy,
            token_sell: record.token_sell,
            invalid: record.invalid,
        })
    }
}

impl TryFrom<wire::PendingTradeRecord> for PendingTrade {
    type Error = BookError;

    fn try_from(record: wire::PendingTradeRecord) -> Result<Self, Self::Error> {
        Ok(PendingTrade {
            amount: parse_amount("amount", &record.amount)?,
            amount_sell_adjusted: parse_amount("amountSellAdjusted", &record.amount_sell_adjusted)?,
            hash: record.hash,
        })
    }
}

impl From<wire::PendingCancelRecord> for PendingCancel {
    fn from(record: wire::PendingCancelRecord) -> Self {
        PendingCancel { hash: record.hash }
    }
}
