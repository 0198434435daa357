//! Plugin discovery port.

use super::CurrencyConverter;

/// Looks up externally registered converters.
///
/// When several are registered, which one is "first" is up to the
/// implementation and not guaranteed to be stable.
pub trait PluginDiscovery {
    fn find_first(&self) -> Option<Box<dyn CurrencyConverter>>;
}
