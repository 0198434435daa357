//! Domain models for the currency converter.

pub mod conversion;
pub mod number;

pub use conversion::{ConversionResult, PRECISION, ROUNDING, round_to_precision};
pub use number::parse_decimal;
