//! # Xrate Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! precision rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ConversionResult, rounding context)
//! - `ports/` - Trait definitions that converters and plugin lookups implement
//! - `error/` - Domain error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use currency_codes::{CurrencyCode, UnknownCurrency};
pub use domain::{ConversionResult, PRECISION, ROUNDING, parse_decimal, round_to_precision};
pub use error::{ArithmeticError, BoxError, ConversionError};
pub use ports::{CurrencyConverter, PluginDiscovery};
pub use rust_decimal::Decimal;
