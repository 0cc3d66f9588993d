//! Display helpers for rendered amounts.

pub mod num;

pub use num::group_thousands;
