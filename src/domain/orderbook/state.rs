//! Memoized buy-book selector. The app owns it and it recomputes only when inputs change.

use super::projection::{compute_buy_orders, compute_buy_total};
use super::{BuyTotal, EnrichedOrder, MarketState};
use crate::config::BookConfig;
use crate::domain::token::Token;
use crate::error::BookError;
use std::sync::Arc;

/// Caches the last buy book and total for a stream of [`MarketState`] snapshots.
///
/// The app owns one selector per view and calls it on every state change.
/// Inputs are compared by `Arc` identity first and by value otherwise, so a
/// snapshot rebuilt with equal contents still hits the cache. Errors are
/// returned without touching the cache.
#[derive(Debug, Default)]
pub struct BuyBookSelector {
    config: BookConfig,
    orders_memo: Option<OrdersMemo>,
    total_memo: Option<TotalMemo>,
    recomputations: u64,
}

#[derive(Debug)]
struct OrdersMemo {
    inputs: MarketState,
    book: Arc<Vec<EnrichedOrder>>,
}

#[derive(Debug)]
struct TotalMemo {
    book: Arc<Vec<EnrichedOrder>>,
    tokens: Arc<Vec<Token>>,
    selected_market: String,
    total: BuyTotal,
}

impl BuyBookSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BookConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// The sorted buy book for `state`, reusing the last result when the six
    /// inputs are unchanged.
    pub fn buy_orders(&mut self, state: &MarketState) -> Result<Arc<Vec<EnrichedOrder>>, BookError> {
        if let Some(memo) = &self.orders_memo {
            if same_inputs(&memo.inputs, state) {
                tracing::debug!("Buy book cache hit: {}", state.selected_market);
                return Ok(memo.book.clone());
            }
        }

        tracing::debug!("Buy book cache miss: {}", state.selected_market);
        let book = Arc::new(compute_buy_orders(state, &self.config)?);
        self.recomputations += 1;
        self.orders_memo = Some(OrdersMemo {
            inputs: state.clone(),
            book: book.clone(),
        });
        Ok(book)
    }

    /// The buy total for `state`, derived from [`Self::buy_orders`].
    pub fn buy_total(&mut self, state: &MarketState) -> Result<BuyTotal, BookError> {
        let book = self.buy_orders(state)?;

        if let Some(memo) = &self.total_memo {
            if Arc::ptr_eq(&memo.book, &book)
                && same(&memo.tokens, &state.tokens)
                && memo.selected_market == state.selected_market
            {
                return Ok(memo.total.clone());
            }
        }

        let total = compute_buy_total(&book, &state.tokens, &state.selected_market, &self.config);
        self.total_memo = Some(TotalMemo {
            book,
            tokens: state.tokens.clone(),
            selected_market: state.selected_market.clone(),
            total: total.clone(),
        });
        Ok(total)
    }

    /// Number of times the buy book has been recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drop cached results; the next call recomputes.
    pub fn clear(&mut self) {
        self.orders_memo = None;
        self.total_memo = None;
    }
}

fn same<T: PartialEq>(a: &Arc<T>, b: &Arc<T>) -> bool {
    Arc::ptr_eq(a, b) || a == b
}

fn same_inputs(a: &MarketState, b: &MarketState) -> bool {
    a.selected_market == b.selected_market
        && a.trade_for_market == b.trade_for_market
        && same(&a.tokens, &b.tokens)
        && same(&a.orders, &b.orders)
        && same(&a.pending_trades, &b.pending_trades)
        && same(&a.pending_cancels, &b.pending_cancels)
}
