//! Built-in currency converter.
//!
//! Wraps a [`RateSource`] and turns its rate into a [`ConversionResult`].
//! A missing rate is terminal for the call; nothing is retried.

use xrate_client::{CurrConvClient, RateSource};
use xrate_types::{
    ArithmeticError, ConversionError, ConversionResult, CurrencyCode, CurrencyConverter, Decimal,
    round_to_precision,
};

/// Converter used when no plugin is registered.
pub struct DefaultCurrencyConverter<S: RateSource> {
    source: S,
    auth_credentials: String,
}

impl DefaultCurrencyConverter<CurrConvClient> {
    /// Creates a converter talking to the default rate API at `endpoint`.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(CurrConvClient::new(endpoint))
    }
}

impl<S: RateSource> DefaultCurrencyConverter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            auth_credentials: String::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: RateSource> CurrencyConverter for DefaultCurrencyConverter<S> {
    fn name(&self) -> &str {
        "default"
    }

    fn set_auth_credentials(&mut self, credentials: &str) {
        self.auth_credentials = credentials.to_string();
    }

    async fn convert(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
    ) -> Result<Option<ConversionResult>, ConversionError> {
        let rate = self
            .source
            .conversion_rate(from, to, &self.auth_credentials)
            .await
            .map_err(|e| ConversionError::DefaultProvider {
                source: Some(Box::new(e)),
            })?
            .ok_or(ConversionError::DefaultProvider { source: None })?;

        let product = amount
            .checked_mul(rate)
            .ok_or(ArithmeticError::Overflow)?;
        let result = round_to_precision(product)?;

        Ok(Some(ConversionResult::new(from, to, amount, result)))
    }
}
