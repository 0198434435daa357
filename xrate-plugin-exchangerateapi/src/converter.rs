//! Converter plugin built on [`ExchangeRateApiClient`].

use xrate_types::{ConversionError, ConversionResult, CurrencyCode, CurrencyConverter, Decimal};

use crate::{ExchangeRateApiClient, ExchangeRateApiError, PLUGIN_NAME};

/// ExchangeRate-API currency converter.
#[derive(Default)]
pub struct ExchangeRateApiConverter {
    client: ExchangeRateApiClient,
    api_key: String,
}

impl ExchangeRateApiConverter {
    pub fn new(client: ExchangeRateApiClient) -> Self {
        Self {
            client,
            api_key: String::new(),
        }
    }
}

#[async_trait::async_trait]
impl CurrencyConverter for ExchangeRateApiConverter {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn set_auth_credentials(&mut self, credentials: &str) {
        self.api_key = credentials.to_string();
    }

    async fn convert(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
    ) -> Result<Option<ConversionResult>, ConversionError> {
        let result = self
            .client
            .convert(from, to, amount, &self.api_key)
            .await
            .map_err(to_conversion_error)?;
        Ok(Some(ConversionResult::new(from, to, amount, result)))
    }
}

fn to_conversion_error(err: ExchangeRateApiError) -> ConversionError {
    if err.is_invalid_endpoint() {
        ConversionError::provider(format!("Error while building URI for ExchangeRate-API: {}", err))
    } else {
        ConversionError::provider(format!("Error while calling ExchangeRate-API: {}", err))
    }
}
