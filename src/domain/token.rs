//! Token metadata and symbol resolution.

use crate::shared::{scale_factor, TokenAddress};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Token metadata as supplied by the app's token list.
///
/// `address` and `decimals` may still be loading upstream; both are optional
/// and every consumer has to branch on their presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Option<TokenAddress>,
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl Token {
    pub fn new(symbol: &str, address: &str, decimals: Option<u32>) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            address: Some(TokenAddress::from(address)),
            decimals,
        }
    }

    /// Case-insensitive symbol match.
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        self.symbol.to_lowercase() == symbol.to_lowercase()
    }

    /// `10^decimals`, or `1` while decimals are unknown.
    pub fn scale_factor(&self) -> BigInt {
        scale_factor(self.decimals)
    }
}

/// Find the first token whose symbol matches `symbol`, ignoring case.
///
/// `None` means the market is unknown (or still loading): no address to
/// match orders against and no decimals to scale with.
pub fn resolve_token<'a>(tokens: &'a [Token], symbol: &str) -> Option<&'a Token> {
    tokens.iter().find(|t| t.matches_symbol(symbol))
}

/// Address of an optionally-resolved token.
pub fn address_of(token: Option<&Token>) -> Option<&TokenAddress> {
    token.and_then(|t| t.address.as_ref())
}

/// Decimals of an optionally-resolved token.
pub fn decimals_of(token: Option<&Token>) -> Option<u32> {
    token.and_then(|t| t.decimals)
}
