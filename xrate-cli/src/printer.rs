//! Console output of a conversion.

use std::io::Write;

use xrate_types::{ConversionResult, Decimal};

const FRACTION_DIGITS: u32 = 4;

/// Writes a conversion as three lines: the converted amount, the rate and
/// the inverse rate.
pub struct ResultPrinter<W: Write> {
    writer: W,
}

impl<W: Write> ResultPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn print(&mut self, result: &ConversionResult) -> anyhow::Result<()> {
        // Derive both rates first so a failure prints nothing.
        let rate = result.rate()?;
        let inverse_rate = result.inverse_rate()?;

        writeln!(
            self.writer,
            "{} {} = {} {}",
            format_decimal(result.amount()),
            result.from(),
            format_decimal(result.result()),
            result.to()
        )?;
        writeln!(self.writer, "1 {} = {} {}", result.from(), format_decimal(rate), result.to())?;
        writeln!(
            self.writer,
            "1 {} = {} {}",
            result.to(),
            format_decimal(inverse_rate),
            result.from()
        )?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Formats with thousands separators and at most four fraction digits,
/// rounding half to even and dropping trailing zeros.
pub fn format_decimal(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(FRACTION_DIGITS, xrate_types::ROUNDING)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}
