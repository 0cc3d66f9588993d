//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format upstream ingestion produces, so they can be used directly in
//! wire types without conversion overhead.

pub mod fmt;
pub mod rational;
pub mod serde_util;

pub use rational::{checked_div, parse_amount, scale, scale_factor, to_decimal_string};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── OrderHash ───────────────────────────────────────────────────────────────

/// Newtype for order hashes: the unique id pending trades and cancels refer to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderHash(String);

impl OrderHash {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OrderHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for OrderHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(OrderHash(s))
    }
}

// ─── TokenAddress ────────────────────────────────────────────────────────────

/// An on-chain token contract address, compared exactly as given.
///
/// Order records and token metadata come from the same upstream source, so
/// no case normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAddress(String);

impl TokenAddress {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TokenAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for TokenAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TokenAddress(s))
    }
}
