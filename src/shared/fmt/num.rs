//! Thousands grouping for already-rendered decimal strings.
//!
//! Rendering itself (precision, truncation) lives in `shared::rational`;
//! this only inserts separators into the integer part.

/// Adds `,` thousands separators to the integer part of a decimal string.
///
/// Fractional digits are left untouched, so a value rendered as `"0.10"`
/// keeps its padding. Non-numeric sentinels pass through unchanged.
pub fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return rendered.to_string();
    }

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
