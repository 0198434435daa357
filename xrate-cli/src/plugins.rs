//! Plugin registration.
//!
//! Converter plugins are compiled in behind cargo features and registered
//! here at startup. With no plugin features enabled the registry stays empty
//! and the built-in converter is used.

use xrate_hex::PluginRegistry;

#[allow(unused_mut)]
pub fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();

    #[cfg(feature = "exchangerateapi")]
    registry.register(xrate_plugin_exchangerateapi::PLUGIN_NAME, || {
        Box::new(xrate_plugin_exchangerateapi::ExchangeRateApiConverter::default())
    });

    registry
}
