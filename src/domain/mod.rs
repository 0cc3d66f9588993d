//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: rich domain types (validated, business-logic-ready)
//! - `wire.rs`: raw serde structs matching the upstream snapshot
//! - `convert.rs`: `TryFrom`/`From` conversions with amount validation
//! - `state.rs`: memoized state containers (orderbook only)

pub mod order;
pub mod orderbook;
pub mod token;
