//! Unified error types.

use thiserror::Error;

/// Top-level error for building and projecting a market snapshot.
///
/// Missing token decimals is not an error: it surfaces as an unpriced order
/// or as [`BuyTotal::Loading`](crate::domain::orderbook::BuyTotal::Loading).
#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid integer amount for {field}: {value:?}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("Division by zero while pricing order {hash}")]
    ZeroDivisor { hash: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type BookResult<T> = Result<T, BookError>;
