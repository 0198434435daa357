//! Explicit plugin registry.
//!
//! Plugins register a factory at startup; discovery instantiates the first
//! registered one. Registration order decides which plugin wins.

use tracing::debug;
use xrate_types::{CurrencyConverter, PluginDiscovery};

type PluginFactory = Box<dyn Fn() -> Box<dyn CurrencyConverter> + Send + Sync>;

/// Registry of plugin converter factories.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<(String, PluginFactory)>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn CurrencyConverter> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(plugin = %name, "registered converter plugin");
        self.plugins.push((name, Box::new(factory)));
    }

    /// Names of the registered plugins, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl PluginDiscovery for PluginRegistry {
    fn find_first(&self) -> Option<Box<dyn CurrencyConverter>> {
        self.plugins.first().map(|(name, factory)| {
            debug!(plugin = %name, "discovered converter plugin");
            factory()
        })
    }
}
