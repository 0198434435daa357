//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use xrate_types::{CurrencyCode, Decimal, UnknownCurrency, parse_decimal};

#[derive(Parser, Debug)]
#[command(name = "xrate")]
#[command(
    version,
    about = "Get exchange rates and convert currencies using third-party services.",
    long_about = None,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// The currency to convert from
    #[arg(value_name = "FROM", default_value = "USD", value_parser = parse_currency)]
    pub from: CurrencyCode,

    /// The currency to convert to
    #[arg(value_name = "TO", default_value = "GBP", value_parser = parse_currency)]
    pub to: CurrencyCode,

    /// The amount to convert
    #[arg(value_name = "AMOUNT", default_value = "1", value_parser = parse_amount)]
    pub amount: Decimal,

    /// Print the available currencies and exit
    #[arg(short, long)]
    pub list: bool,

    /// Path to the config file to use [default: xrate.env]
    #[arg(short, long, env = "XRATE_CONFIG")]
    pub config: Option<PathBuf>,
}

fn parse_currency(s: &str) -> Result<CurrencyCode, String> {
    s.parse().map_err(|e: UnknownCurrency| e.to_string())
}

fn parse_amount(s: &str) -> Result<Decimal, String> {
    parse_decimal(s).ok_or_else(|| format!("Invalid amount: {}", s))
}

/// Every known currency code, sorted and comma separated.
pub fn available_currencies() -> String {
    let mut codes: Vec<&str> = CurrencyCode::all().iter().map(|c| c.code()).collect();
    codes.sort_unstable();
    codes.join(", ")
}
