//! Pure exact-arithmetic module for token amounts and prices.
//!
//! All math uses `num_bigint::BigInt` / `num_rational::BigRational`.
//! No floating point, no rounding until a value is rendered for display.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::error::BookError;

/// Parse an integer amount in a token's smallest unit.
///
/// Accepts an optional sign followed by decimal digits. Anything else is an
/// [`BookError::InvalidAmount`] naming the offending wire field.
pub fn parse_amount(field: &'static str, value: &str) -> Result<BigInt, BookError> {
    value
        .parse::<BigInt>()
        .map_err(|_| BookError::InvalidAmount {
            field,
            value: value.to_string(),
        })
}

/// `10^decimals`, or `1` when the token's decimals are unknown.
pub fn scale_factor(decimals: Option<u32>) -> BigInt {
    match decimals {
        Some(d) => num_traits::pow(BigInt::from(10u8), d as usize),
        None => BigInt::from(1u8),
    }
}

/// Convert a smallest-unit amount to its human-scale quantity.
///
/// ```text
/// quantity = amount / 10^decimals
/// ```
pub fn scale(amount: &BigInt, factor: &BigInt) -> BigRational {
    BigRational::new(amount.clone(), factor.clone())
}

/// Exact division; `None` when the divisor is zero.
pub fn checked_div(lhs: &BigRational, rhs: &BigRational) -> Option<BigRational> {
    if rhs.is_zero() {
        None
    } else {
        Some(lhs / rhs)
    }
}

/// Render a rational as a decimal string with at most `precision` fractional digits.
///
/// # Rendering rules
///
/// | Rule | Example |
/// |------|---------|
/// | digits beyond `precision` are truncated toward zero | `1/3 @4 → 0.3333` |
/// | exact values drop trailing zeros | `1/2 @4 → 0.5`, `2 @8 → 2` |
/// | inexact values keep the padded digits | `1/101 @2 → 0.00` |
/// | negative values carry a leading `-` | `-1/2 @4 → -0.5` |
pub fn to_decimal_string(value: &BigRational, precision: u32) -> String {
    let numer = value.numer().abs();
    let denom = value.denom().abs();

    let int_part = &numer / &denom;
    let remainder = &numer % &denom;

    let shifted = remainder * num_traits::pow(BigInt::from(10u8), precision as usize);
    let frac = &shifted / &denom;
    let exact = (&shifted % &denom).is_zero();

    let mut frac_digits = frac.to_string();
    let width = precision as usize;
    if frac_digits.len() < width {
        frac_digits = format!("{}{}", "0".repeat(width - frac_digits.len()), frac_digits);
    }
    if exact {
        let trimmed = frac_digits.trim_end_matches('0').len();
        frac_digits.truncate(trimmed);
    }
    if precision == 0 {
        frac_digits.clear();
    }

    let sign = if value.is_negative() { "-" } else { "" };
    if frac_digits.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_digits)
    }
}
