//! Immutable result of a currency conversion.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::CurrencyCode;
use crate::error::ArithmeticError;

/// Number of significant digits kept by every rate and result computation.
pub const PRECISION: u32 = 3;

/// Rounding applied together with [`PRECISION`].
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Rounds `value` to [`PRECISION`] significant digits, half to even.
pub fn round_to_precision(value: Decimal) -> Result<Decimal, ArithmeticError> {
    value
        .round_sf_with_strategy(PRECISION, ROUNDING)
        .ok_or(ArithmeticError::Overflow)
}

/// A completed conversion.
///
/// Holds the initial parameters next to the converted amount. Rate and
/// inverse rate are derived on demand and never stored, so two results with
/// the same four fields are always equal and hash the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionResult {
    from: CurrencyCode,
    to: CurrencyCode,
    amount: Decimal,
    result: Decimal,
}

impl ConversionResult {
    pub fn new(from: CurrencyCode, to: CurrencyCode, amount: Decimal, result: Decimal) -> Self {
        Self {
            from,
            to,
            amount,
            result,
        }
    }

    /// The currency converted from.
    pub fn from(&self) -> CurrencyCode {
        self.from
    }

    /// The currency converted to.
    pub fn to(&self) -> CurrencyCode {
        self.to
    }

    /// The amount converted.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The converted amount.
    pub fn result(&self) -> Decimal {
        self.result
    }

    /// Units of `to` per one unit of `from`: `result / amount`.
    ///
    /// If 2 USD = 1.44 GBP then the rate is 0.72, thus 1 USD = 0.72 GBP.
    pub fn rate(&self) -> Result<Decimal, ArithmeticError> {
        divide(self.result, self.amount)
    }

    /// Units of `from` per one unit of `to`: `amount / result`.
    ///
    /// If 2 USD = 1.44 GBP then the inverse rate is 1.39, thus 1 GBP = 1.39 USD.
    pub fn inverse_rate(&self) -> Result<Decimal, ArithmeticError> {
        divide(self.amount, self.result)
    }
}

fn divide(dividend: Decimal, divisor: Decimal) -> Result<Decimal, ArithmeticError> {
    if divisor.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    let quotient = dividend
        .checked_div(divisor)
        .ok_or(ArithmeticError::Overflow)?;
    round_to_precision(quotient)
}
