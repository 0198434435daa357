//! # Xrate Hex
//!
//! Application layer for the currency converter.
//!
//! ## Architecture
//!
//! - `converter` - Built-in converter backed by the default rate API
//! - `registry` - Explicit plugin registry used for discovery
//! - `service` - Provider resolution (plugin first, built-in fallback)
//!
//! The service is generic over `D: PluginDiscovery`, allowing any discovery
//! mechanism to be injected.

pub mod converter;
pub mod registry;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use converter::DefaultCurrencyConverter;
pub use registry::PluginRegistry;
pub use service::{Xrate, XrateConfig};
