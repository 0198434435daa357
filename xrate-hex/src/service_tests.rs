//! Xrate resolution unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use xrate_types::{
        ConversionError, ConversionResult, CurrencyCode, CurrencyConverter, Decimal,
    };

    use crate::{PluginRegistry, Xrate, XrateConfig};

    /// Plugin converter with a canned answer that records its credentials.
    pub struct MockConverter {
        name: &'static str,
        answer: fn(CurrencyCode, CurrencyCode, Decimal) -> Result<Option<ConversionResult>, ConversionError>,
        credentials: Arc<Mutex<Option<String>>>,
    }

    #[async_trait]
    impl CurrencyConverter for MockConverter {
        fn name(&self) -> &str {
            self.name
        }

        fn set_auth_credentials(&mut self, credentials: &str) {
            *self.credentials.lock().unwrap() = Some(credentials.to_string());
        }

        async fn convert(
            &self,
            from: CurrencyCode,
            to: CurrencyCode,
            amount: Decimal,
        ) -> Result<Option<ConversionResult>, ConversionError> {
            (self.answer)(from, to, amount)
        }
    }

    fn fixed_rate(
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
    ) -> Result<Option<ConversionResult>, ConversionError> {
        Ok(Some(ConversionResult::new(from, to, amount, amount * dec!(0.72))))
    }

    fn no_result(
        _: CurrencyCode,
        _: CurrencyCode,
        _: Decimal,
    ) -> Result<Option<ConversionResult>, ConversionError> {
        Ok(None)
    }

    fn failure(
        _: CurrencyCode,
        _: CurrencyCode,
        _: Decimal,
    ) -> Result<Option<ConversionResult>, ConversionError> {
        Err(ConversionError::provider("testMessage"))
    }

    fn config() -> XrateConfig {
        XrateConfig {
            core_endpoint: "http://localhost:1/convert".into(),
            core_auth: "coreAuth".into(),
            plugin_auth: "pluginAuth".into(),
        }
    }

    fn registry_with(
        name: &'static str,
        answer: fn(CurrencyCode, CurrencyCode, Decimal) -> Result<Option<ConversionResult>, ConversionError>,
    ) -> (PluginRegistry, Arc<Mutex<Option<String>>>) {
        let credentials = Arc::new(Mutex::new(None));
        let shared = credentials.clone();
        let mut registry = PluginRegistry::new();
        registry.register(name, move || {
            Box::new(MockConverter {
                name,
                answer,
                credentials: shared.clone(),
            }) as Box<dyn CurrencyConverter>
        });
        (registry, credentials)
    }

    #[test]
    fn test_plugin_is_selected_over_default() {
        let (registry, _) = registry_with("test-plugin", fixed_rate);
        let xrate = Xrate::new(config(), registry);

        let converter = xrate.create_converter();

        assert_eq!(converter.name(), "test-plugin");
    }

    #[test]
    fn test_default_is_selected_without_plugins() {
        let xrate = Xrate::new(config(), PluginRegistry::new());

        let converter = xrate.create_converter();

        assert_eq!(converter.name(), "default");
    }

    #[test]
    fn test_plugin_receives_plugin_credentials() {
        let (registry, credentials) = registry_with("test-plugin", fixed_rate);
        let xrate = Xrate::new(config(), registry);

        xrate.create_converter();

        assert_eq!(credentials.lock().unwrap().as_deref(), Some("pluginAuth"));
    }

    #[test]
    fn test_first_registered_plugin_wins() {
        let (mut registry, _) = registry_with("first", fixed_rate);
        registry.register("second", || {
            Box::new(MockConverter {
                name: "second",
                answer: fixed_rate,
                credentials: Arc::new(Mutex::new(None)),
            }) as Box<dyn CurrencyConverter>
        });
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["first", "second"]);

        let xrate = Xrate::new(config(), registry);

        assert_eq!(xrate.create_converter().name(), "first");
    }

    #[tokio::test]
    async fn test_convert_returns_plugin_result() {
        let (registry, _) = registry_with("test-plugin", fixed_rate);
        let xrate = Xrate::new(config(), registry);

        let result = xrate
            .convert(CurrencyCode::USD, CurrencyCode::GBP, dec!(1))
            .await
            .unwrap();

        assert_eq!(
            result,
            ConversionResult::new(CurrencyCode::USD, CurrencyCode::GBP, dec!(1), dec!(0.72))
        );
    }

    #[tokio::test]
    async fn test_absent_plugin_result_is_rejected() {
        let (registry, _) = registry_with("null-plugin", no_result);
        let xrate = Xrate::new(config(), registry);

        let err = xrate
            .convert(CurrencyCode::USD, CurrencyCode::GBP, dec!(1))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::MissingResult));
        assert_eq!(err.to_string(), "Error: converter did not return any result");
    }

    #[tokio::test]
    async fn test_plugin_error_is_not_swallowed() {
        let (registry, _) = registry_with("failing-plugin", failure);
        let xrate = Xrate::new(config(), registry);

        let err = xrate
            .convert(CurrencyCode::USD, CurrencyCode::GBP, dec!(1))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "testMessage");
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn test_default_config_points_at_public_endpoint() {
        let config = XrateConfig::default();
        assert_eq!(config.core_endpoint, "https://free.currconv.com/api/v7/convert");
        assert!(config.core_auth.is_empty());
        assert!(config.plugin_auth.is_empty());
    }
}
