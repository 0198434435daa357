//! Exact decimal parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a decimal from its textual form, plain or scientific notation.
///
/// Values never pass through a binary floating-point intermediate.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
