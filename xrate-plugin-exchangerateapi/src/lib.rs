//! # ExchangeRate-API Plugin
//!
//! A [`CurrencyConverter`](xrate_types::CurrencyConverter) backed by
//! ExchangeRate-API's pair conversion endpoint. The service computes the
//! converted amount itself and reports failures through its own `error-type`
//! vocabulary, which this crate translates into readable messages.

pub mod client;
pub mod converter;
pub mod error;

pub use client::{DEFAULT_ENDPOINT, ExchangeRateApiClient};
pub use converter::ExchangeRateApiConverter;
pub use error::ExchangeRateApiError;

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "exchangerate-api";
