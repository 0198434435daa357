//! Provider Resolution Service
//!
//! Decides, once per run, which converter handles the conversion and hands it
//! the matching credentials. A discovered plugin always wins; without one the
//! built-in converter is used, so a usable converter always exists.

use tracing::info;
use xrate_client::DEFAULT_ENDPOINT;
use xrate_types::{
    ConversionError, ConversionResult, CurrencyCode, CurrencyConverter, Decimal, PluginDiscovery,
};

use crate::DefaultCurrencyConverter;

/// Settings the resolver reads from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrateConfig {
    /// Endpoint of the built-in rate API.
    pub core_endpoint: String,
    /// Credentials for the built-in converter.
    pub core_auth: String,
    /// Credentials for a plugin converter.
    pub plugin_auth: String,
}

impl Default for XrateConfig {
    fn default() -> Self {
        Self {
            core_endpoint: DEFAULT_ENDPOINT.to_string(),
            core_auth: String::new(),
            plugin_auth: String::new(),
        }
    }
}

/// Resolves a converter and runs a single conversion with it.
///
/// Generic over `D: PluginDiscovery` - the lookup is injected at compile time.
pub struct Xrate<D: PluginDiscovery> {
    config: XrateConfig,
    discovery: D,
}

impl<D: PluginDiscovery> Xrate<D> {
    pub fn new(config: XrateConfig, discovery: D) -> Self {
        Self { config, discovery }
    }

    /// Picks the converter for this run, with credentials already set.
    pub fn create_converter(&self) -> Box<dyn CurrencyConverter> {
        match self.discovery.find_first() {
            Some(mut plugin) => {
                info!(provider = plugin.name(), "using plugin converter");
                plugin.set_auth_credentials(&self.config.plugin_auth);
                plugin
            }
            None => {
                info!(endpoint = %self.config.core_endpoint, "no plugin found, using default converter");
                let mut converter =
                    DefaultCurrencyConverter::with_endpoint(self.config.core_endpoint.clone());
                converter.set_auth_credentials(&self.config.core_auth);
                Box::new(converter)
            }
        }
    }

    /// Converts `amount` using whichever converter resolution selects.
    ///
    /// A converter that finishes without a result is rejected here rather
    /// than letting the absence travel further.
    pub async fn convert(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
    ) -> Result<ConversionResult, ConversionError> {
        let converter = self.create_converter();
        converter
            .convert(from, to, amount)
            .await?
            .ok_or(ConversionError::MissingResult)
    }
}
