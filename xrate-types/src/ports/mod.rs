//! Port traits (interfaces for adapters).
//!
//! These are the contracts that converters and plugin lookups must implement.
//! The application layer depends on these traits, not concrete implementations.

mod converter;
mod discovery;

pub use converter::CurrencyConverter;
pub use discovery::PluginDiscovery;
