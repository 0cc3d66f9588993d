//! Buy-side projection: filter, enrich, sort and accumulate raw orders.
//!
//! Pure functions over a [`MarketState`] snapshot. Memoization lives in
//! [`BuyBookSelector`](super::BuyBookSelector).
//!
//! # Pipeline
//!
//! ```text
//! orders ─▶ valid ─▶ market ─▶ not cancelled ─▶ + pending deltas
//!        ─▶ remaining ≠ 0 ─▶ priced ─▶ sorted by price desc ─▶ running sum
//! ```

use super::{BuyTotal, EnrichedOrder, MarketState};
use crate::config::{BookConfig, UNPRICED};
use crate::domain::order::{Order, PendingTrade};
use crate::domain::token::{address_of, decimals_of, resolve_token, Token};
use crate::error::BookError;
use crate::shared::{checked_div, scale, scale_factor, to_decimal_string, OrderHash};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use std::collections::{HashMap, HashSet};

/// Summed pending deltas for one order: `(amount, amount_sell_adjusted)`.
type PendingDeltas = (BigInt, BigInt);

/// Derive the sorted buy book for the selected market.
///
/// Keeps orders that sell the selected token for the counter token, are not
/// invalid or pending cancellation, and still have something left on both
/// sides once pending trades are subtracted.
///
/// Fails only on a price division by zero, which means the upstream order
/// data broke its contract; no partial book is returned.
pub fn compute_buy_orders(
    state: &MarketState,
    config: &BookConfig,
) -> Result<Vec<EnrichedOrder>, BookError> {
    let selected = resolve_token(&state.tokens, &state.selected_market);
    let trade_for = resolve_token(&state.tokens, &state.trade_for_market);
    if selected.is_none() {
        tracing::warn!("Selected market token not found: {}", state.selected_market);
    }
    if trade_for.is_none() {
        tracing::warn!("Trade-for token not found: {}", state.trade_for_market);
    }

    let pricing = Pricing::new(selected, trade_for);
    let selected_address = address_of(selected);
    let trade_for_address = address_of(trade_for);

    let cancelled: HashSet<&OrderHash> = state.pending_cancels.iter().map(|c| &c.hash).collect();
    let pending = pending_by_hash(&state.pending_trades);

    let market_orders: Vec<&Order> = state
        .orders
        .iter()
        .filter(|o| !o.invalid)
        .filter(|o| {
            trade_for_address == Some(&o.token_buy) && selected_address == Some(&o.token_sell)
        })
        .filter(|o| !cancelled.contains(&o.hash))
        .collect();
    let matched = market_orders.len();

    let zero: PendingDeltas = (BigInt::zero(), BigInt::zero());
    let enriched = market_orders
        .into_iter()
        .filter_map(|o| {
            let (get, give) = pending.get(&o.hash).unwrap_or(&zero);
            has_remaining(o, get, give).then(|| (o, get, give))
        })
        .map(|(o, get, give)| pricing.enrich(o, get, give, config))
        .collect::<Result<Vec<_>, _>>()?;

    let book = accumulate_depth(sort_by_price_desc(enriched), config);
    tracing::debug!(
        "Buy book {}/{}: {} orders, {} in market, {} remaining ({} priced)",
        state.selected_market,
        state.trade_for_market,
        state.orders.len(),
        matched,
        book.len(),
        book.iter().filter(|o| o.is_priced()).count(),
    );
    Ok(book)
}

/// Total remaining sell amount of `orders`, scaled by the selected token.
///
/// Sums `amount_sell_remaining` (or `amount_sell`) without subtracting
/// pending trades. [`BuyTotal::Loading`] while the selected token or its
/// decimals are unknown.
pub fn compute_buy_total(
    orders: &[EnrichedOrder],
    tokens: &[Token],
    selected_market: &str,
    config: &BookConfig,
) -> BuyTotal {
    let Some(selected) = resolve_token(tokens, selected_market).filter(|t| t.decimals.is_some())
    else {
        return BuyTotal::Loading;
    };

    let total: BigInt = orders.iter().map(|o| o.order.remaining_sell()).sum();
    let value = scale(&total, &selected.scale_factor());
    BuyTotal::Amount {
        rendered: to_decimal_string(&value, config.default_precision),
        value,
    }
}

// ─── Stages ──────────────────────────────────────────────────────────────────

fn pending_by_hash(trades: &[PendingTrade]) -> HashMap<&OrderHash, PendingDeltas> {
    trades.iter().fold(HashMap::new(), |mut acc, trade| {
        let (get, give) = acc
            .entry(&trade.hash)
            .or_insert_with(|| (BigInt::zero(), BigInt::zero()));
        *get += &trade.amount;
        *give += &trade.amount_sell_adjusted;
        acc
    })
}

/// Whether an order still has something left after pending deltas.
///
/// All four must hold:
///
/// | # | condition |
/// |---|-----------|
/// | a | no buy override, or `amount_buy_remaining − get ≠ 0` |
/// | b | `amount_buy − get ≠ 0` |
/// | c | `amount_sell − give ≠ 0` |
/// | d | no sell override, or `amount_sell_remaining − give ≠ 0` |
pub(crate) fn has_remaining(order: &Order, get: &BigInt, give: &BigInt) -> bool {
    let buy_remaining_left = order
        .amount_buy_remaining
        .as_ref()
        .map_or(true, |r| r != get);
    let buy_left = &order.amount_buy != get;
    let sell_left = &order.amount_sell != give;
    let sell_remaining_left = order
        .amount_sell_remaining
        .as_ref()
        .map_or(true, |r| r != give);

    buy_remaining_left && buy_left && sell_left && sell_remaining_left
}

/// Scale factors and decimals availability for the market pair.
struct Pricing {
    selected_factor: BigInt,
    trade_for_factor: BigInt,
    decimals_known: bool,
}

impl Pricing {
    fn new(selected: Option<&Token>, trade_for: Option<&Token>) -> Self {
        let selected_decimals = decimals_of(selected);
        let trade_for_decimals = decimals_of(trade_for);
        Self {
            selected_factor: selected.map_or_else(|| scale_factor(None), Token::scale_factor),
            trade_for_factor: trade_for.map_or_else(|| scale_factor(None), Token::scale_factor),
            decimals_known: selected_decimals.is_some() && trade_for_decimals.is_some(),
        }
    }

    /// ```text
    /// price = (amount_sell / 10^selected) / (amount_buy / 10^trade_for)
    /// buy   = (remaining_buy  − get)  / 10^trade_for
    /// sell  = (remaining_sell − give) / 10^selected
    /// ```
    fn enrich(
        &self,
        order: &Order,
        get: &BigInt,
        give: &BigInt,
        config: &BookConfig,
    ) -> Result<EnrichedOrder, BookError> {
        let price_rational = if order.has_buy_amount() && self.decimals_known {
            let sell = scale(&order.amount_sell, &self.selected_factor);
            let buy = scale(&order.amount_buy, &self.trade_for_factor);
            checked_div(&sell, &buy).ok_or_else(|| BookError::ZeroDivisor {
                hash: order.hash.to_string(),
            })?
        } else {
            BigRational::zero()
        };
        let buy_rational = scale(&(order.remaining_buy() - get), &self.trade_for_factor);
        let sell_rational = scale(&(order.remaining_sell() - give), &self.selected_factor);

        let price = if price_rational.is_zero() {
            UNPRICED.to_string()
        } else {
            to_decimal_string(&price_rational, config.rational_precision)
        };

        Ok(EnrichedOrder {
            order: order.clone(),
            pending_amount_get: get.clone(),
            pending_amount_give: give.clone(),
            price,
            buy: to_decimal_string(&buy_rational, config.rational_precision),
            sell: to_decimal_string(&sell_rational, config.rational_precision),
            sum: String::new(),
            price_rational,
            buy_rational,
            sell_rational,
            sum_rational: BigRational::zero(),
        })
    }
}

/// Stable sort of priced orders by descending price.
///
/// Unpriced orders take no part in the comparison and stay at their
/// positions; priced orders are sorted into the remaining slots.
pub(crate) fn sort_by_price_desc(orders: Vec<EnrichedOrder>) -> Vec<EnrichedOrder> {
    let mut cells: Vec<Option<EnrichedOrder>> = orders.into_iter().map(Some).collect();
    let slots: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.as_ref().is_some_and(EnrichedOrder::is_priced))
        .map(|(i, _)| i)
        .collect();

    let mut priced: Vec<EnrichedOrder> = slots.iter().filter_map(|&i| cells[i].take()).collect();
    priced.sort_by(|a, b| b.price_rational.cmp(&a.price_rational));

    for (slot, order) in slots.into_iter().zip(priced) {
        cells[slot] = Some(order);
    }
    cells.into_iter().flatten().collect()
}

/// Attach the running total of `sell` (exact) to each order, in book order.
pub(crate) fn accumulate_depth(orders: Vec<EnrichedOrder>, config: &BookConfig) -> Vec<EnrichedOrder> {
    let capacity = orders.len();
    let (_, book) = orders.into_iter().fold(
        (BigRational::zero(), Vec::with_capacity(capacity)),
        |(running, mut book), mut order| {
            let running = &running + &order.sell_rational;
            order.sum = to_decimal_string(&running, config.default_precision);
            order.sum_rational = running.clone();
            book.push(order);
            (running, book)
        },
    );
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::PendingCancel;
    use crate::shared::TokenAddress;

    const ETH: &str = "0x0000000000000000000000000000000000000000";
    const ZRX: &str = "0xe41d2489571d322189246dafa5ebde1f4699f498";

    fn tokens() -> Vec<Token> {
        vec![Token::new("ETH", ETH, Some(18)), Token::new("ZRX", ZRX, Some(18))]
    }

    fn order(hash: &str, amount_buy: &str, amount_sell: &str) -> Order {
        Order {
            hash: OrderHash::from(hash),
            token_buy: TokenAddress::from(ETH),
            token_sell: TokenAddress::from(ZRX),
            amount_buy: amount_buy.parse().unwrap(),
            amount_sell: amount_sell.parse().unwrap(),
            amount_buy_remaining: None,
            amount_sell_remaining: None,
            invalid: false,
        }
    }

    fn trade(hash: &str, amount: i64, amount_sell_adjusted: i64) -> PendingTrade {
        PendingTrade {
            hash: OrderHash::from(hash),
            amount: BigInt::from(amount),
            amount_sell_adjusted: BigInt::from(amount_sell_adjusted),
        }
    }

    fn market(orders: Vec<Order>) -> MarketState {
        MarketState::new(tokens(), "ZRX", "ETH").with_orders(orders)
    }

    fn hashes(book: &[EnrichedOrder]) -> Vec<&str> {
        book.iter().map(|o| o.order.hash.as_str()).collect()
    }

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    // ── has_remaining, one sub-condition at a time ───────────────────────────

    #[test]
    fn test_remaining_buy_override_exhausted() {
        let mut o = order("a", "100", "200");
        o.amount_buy_remaining = Some(big(30));
        assert!(!has_remaining(&o, &big(30), &big(1)));
        assert!(has_remaining(&o, &big(29), &big(1)));
    }

    #[test]
    fn test_remaining_buy_full_amount_exhausted() {
        let o = order("a", "100", "200");
        assert!(!has_remaining(&o, &big(100), &big(1)));
    }

    #[test]
    fn test_remaining_buy_full_amount_exhausted_despite_override() {
        // Override still has 50 left but the full-amount delta is zero.
        let mut o = order("a", "100", "200");
        o.amount_buy_remaining = Some(big(150));
        assert!(!has_remaining(&o, &big(100), &big(1)));
    }

    #[test]
    fn test_remaining_sell_full_amount_exhausted() {
        let o = order("a", "100", "200");
        assert!(!has_remaining(&o, &big(1), &big(200)));
        assert!(has_remaining(&o, &big(1), &big(199)));
    }

    #[test]
    fn test_remaining_sell_override_exhausted() {
        let mut o = order("a", "100", "200");
        o.amount_sell_remaining = Some(big(80));
        assert!(!has_remaining(&o, &big(1), &big(80)));
        assert!(has_remaining(&o, &big(1), &big(79)));
    }

    #[test]
    fn test_remaining_zero_override_without_pending_is_dropped() {
        let mut o = order("a", "100", "200");
        o.amount_sell_remaining = Some(big(0));
        assert!(!has_remaining(&o, &big(0), &big(0)));
    }

    #[test]
    fn test_remaining_one_side_filled_other_side_open() {
        // Only the sell override is consumed; the order is still dropped.
        let mut o = order("a", "100", "200");
        o.amount_buy_remaining = Some(big(60));
        o.amount_sell_remaining = Some(big(120));
        assert!(!has_remaining(&o, &big(10), &big(120)));
    }

    // ── pipeline ─────────────────────────────────────────────────────────────

    #[test]
    fn test_pending_deltas_are_summed_per_hash() {
        let pending = [trade("a", 1, 2), trade("b", 5, 5), trade("a", 3, 4)];
        let by_hash = pending_by_hash(&pending);
        assert_eq!(by_hash[&OrderHash::from("a")], (big(4), big(6)));
        assert_eq!(by_hash[&OrderHash::from("b")], (big(5), big(5)));
    }

    #[test]
    fn test_enriches_with_pending_amounts() {
        let state = market(vec![order("a", "1000", "2000")])
            .with_pending_trades(vec![trade("a", 100, 200), trade("a", 100, 200)]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book[0].pending_amount_get, big(200));
        assert_eq!(book[0].pending_amount_give, big(400));
        assert_eq!(
            book[0].sell_rational,
            scale(&big(1600), &scale_factor(Some(18)))
        );
    }

    #[test]
    fn test_invalid_and_cancelled_dropped() {
        let mut bad = order("bad", "1", "1");
        bad.invalid = true;
        let state = market(vec![bad, order("gone", "1", "1"), order("ok", "1", "1")])
            .with_pending_cancels(vec![PendingCancel {
                hash: OrderHash::from("gone"),
            }]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(hashes(&book), ["ok"]);
    }

    #[test]
    fn test_other_market_dropped() {
        let mut reversed = order("rev", "1", "1");
        reversed.token_buy = TokenAddress::from(ZRX);
        reversed.token_sell = TokenAddress::from(ETH);
        let state = market(vec![reversed, order("ok", "1", "1")]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(hashes(&book), ["ok"]);
    }

    #[test]
    fn test_sorted_by_price_descending() {
        let state = market(vec![
            order("cheap", "100", "100"),
            order("dear", "100", "300"),
            order("mid", "100", "200"),
        ]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(hashes(&book), ["dear", "mid", "cheap"]);
        assert_eq!(book[0].price, "3");
        assert_eq!(book[2].price, "1");
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let state = market(vec![
            order("first", "100", "200"),
            order("second", "50", "100"),
            order("third", "100", "300"),
        ]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(hashes(&book), ["third", "first", "second"]);
    }

    #[test]
    fn test_running_sum_accumulates_sell() {
        let state = market(vec![
            order("a", "1000000000000000000", "1000000000000000000"),
            order("b", "1000000000000000000", "2500000000000000000"),
        ]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(hashes(&book), ["b", "a"]);
        assert_eq!(book[0].sell, "2.5");
        assert_eq!(book[0].sum, "2.5");
        assert_eq!(book[1].sum, "3.5");
    }

    #[test]
    fn test_unpriced_orders_keep_their_slots() {
        let pricing = Pricing::new(
            Some(&Token::new("ZRX", ZRX, Some(0))),
            Some(&Token::new("ETH", ETH, Some(0))),
        );
        let mut enriched: Vec<EnrichedOrder> = [("p1", "100"), ("na", "100"), ("p2", "300"), ("p3", "200")]
            .iter()
            .map(|(hash, sell)| {
                pricing
                    .enrich(&order(hash, "100", sell), &big(0), &big(0), &BookConfig::default())
                    .unwrap()
            })
            .collect();
        enriched[1].price_rational = BigRational::zero();
        enriched[1].price = UNPRICED.to_string();

        let sorted = sort_by_price_desc(enriched);
        assert_eq!(hashes(&sorted), ["p2", "na", "p3", "p1"]);
    }

    #[test]
    fn test_unknown_decimals_leave_orders_unpriced() {
        let tokens = vec![Token::new("ETH", ETH, Some(18)), Token::new("ZRX", ZRX, None)];
        let state = MarketState::new(tokens, "ZRX", "ETH")
            .with_orders(vec![order("a", "100", "300"), order("b", "100", "200")]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(hashes(&book), ["a", "b"]);
        assert!(book.iter().all(|o| o.price == UNPRICED));
        // Unknown decimals scale by 1.
        assert_eq!(book[0].sell, "300");
    }

    #[test]
    fn test_zero_buy_amount_is_a_contract_violation() {
        // amount_buy 0 survives the remaining filter thanks to a pending delta.
        let state = market(vec![order("z", "0", "100")])
            .with_pending_trades(vec![trade("z", 1, 1)]);
        let err = compute_buy_orders(&state, &BookConfig::default()).unwrap_err();
        assert!(matches!(err, BookError::ZeroDivisor { hash } if hash == "z"));
    }

    #[test]
    fn test_zero_buy_with_zero_override_is_unpriced() {
        let mut o = order("z", "0", "100");
        o.amount_buy_remaining = Some(big(5));
        let state = market(vec![o.clone()]).with_pending_trades(vec![trade("z", 1, 1)]);
        assert!(compute_buy_orders(&state, &BookConfig::default()).is_err());

        o.amount_buy_remaining = Some(big(0));
        let state = market(vec![o]).with_pending_trades(vec![trade("z", 1, 1)]);
        let book = compute_buy_orders(&state, &BookConfig::default()).unwrap();
        assert_eq!(book[0].price, UNPRICED);
        assert_eq!(book[0].buy, "-0.00000000");
    }

    #[test]
    fn test_total_sums_remaining_sell() {
        let mut partially = order("a", "100", "3000000000000000000");
        partially.amount_sell_remaining = Some("1000000000000000000".parse().unwrap());
        let state = market(vec![partially, order("b", "100", "500000000000000000")]);
        let config = BookConfig::default();
        let book = compute_buy_orders(&state, &config).unwrap();
        let total = compute_buy_total(&book, &state.tokens, "zrx", &config);
        assert_eq!(total.as_str(), "1.5");
    }

    #[test]
    fn test_total_ignores_pending_deltas() {
        let state = market(vec![order("a", "100", "2000000000000000000")])
            .with_pending_trades(vec![trade("a", 10, 1_000_000_000_000_000_000)]);
        let config = BookConfig::default();
        let book = compute_buy_orders(&state, &config).unwrap();
        assert_eq!(book[0].sell, "1");
        let total = compute_buy_total(&book, &state.tokens, "ZRX", &config);
        assert_eq!(total.as_str(), "2");
    }

    #[test]
    fn test_total_empty_book_is_zero() {
        let total = compute_buy_total(&[], &tokens(), "ZRX", &BookConfig::default());
        assert_eq!(total.as_str(), "0");
    }

    #[test]
    fn test_total_loading_without_decimals() {
        let tokens = vec![Token::new("ZRX", ZRX, None)];
        let total = compute_buy_total(&[], &tokens, "ZRX", &BookConfig::default());
        assert_eq!(total, BuyTotal::Loading);
        let total = compute_buy_total(&[], &tokens, "DAI", &BookConfig::default());
        assert_eq!(total, BuyTotal::Loading);
    }
}
