//! # tradebook
//!
//! Buy-side order book projection for a token-pair exchange UI.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared**: order hash and token address newtypes, exact rational helpers, display formatting
//! 2. **Domain**: tokens, orders and pending actions, the buy-book projection and its memoized selector
//! 3. **Config**: display precisions and sentinels
//!
//! All amounts are arbitrary-precision integers in each token's smallest
//! unit. Prices, quantities and running sums are exact rationals until they
//! are rendered for display.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradebook::prelude::*;
//!
//! let state = MarketState::from_json(&snapshot_json)?;
//! let mut selector = BuyBookSelector::new();
//!
//! for order in selector.buy_orders(&state)?.iter() {
//!     println!("{} {} {}", order.formatted_price(), order.sell, order.formatted_sum());
//! }
//! println!("total: {}", selector.buy_total(&state)?);
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes and exact-arithmetic helpers used across all domains.
pub mod shared;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

// ── Layer 3: Config ──────────────────────────────────────────────────────────

/// Display precisions and sentinel strings.
pub mod config;

/// Unified error types.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{OrderHash, TokenAddress};

    // Domain types: token
    pub use crate::domain::token::{resolve_token, Token};

    // Domain types: order
    pub use crate::domain::order::{Order, PendingCancel, PendingTrade};

    // Domain types: orderbook
    pub use crate::domain::orderbook::{
        compute_buy_orders, compute_buy_total, BuyTotal, EnrichedOrder, MarketState,
    };

    // Config
    pub use crate::config::{BookConfig, DEFAULT_PRECISION, RATIONAL_PRECISION};

    // Errors
    pub use crate::error::{BookError, BookResult};

    // State containers
    pub use crate::domain::orderbook::BuyBookSelector;
}
