//! HTTP client for ExchangeRate-API's pair conversion endpoint.

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;
use xrate_types::{CurrencyCode, Decimal, parse_decimal};

use crate::ExchangeRateApiError;

/// Public ExchangeRate-API host.
pub const DEFAULT_ENDPOINT: &str = "https://v6.exchangerate-api.com";

const SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
struct PairResponse {
    result: Option<String>,
    conversion_result: Option<serde_json::Value>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

/// Client for `GET {endpoint}/v6/{key}/pair/{FROM}/{TO}/{AMOUNT}`.
pub struct ExchangeRateApiClient {
    endpoint: String,
    http: Client,
}

impl Default for ExchangeRateApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ExchangeRateApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    /// Converts `amount` and returns the service's result as is.
    pub async fn convert(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
        api_key: &str,
    ) -> Result<Decimal, ExchangeRateApiError> {
        let url = self.build_url(from, to, amount, api_key)?;
        debug!(endpoint = %self.endpoint, %from, %to, %amount, "calling ExchangeRate-API");

        // Error responses carry a JSON body too, so the status is not checked.
        let body = self.http.get(url).send().await?.text().await?;
        conversion_result(&body)
    }

    fn build_url(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
        api_key: &str,
    ) -> Result<Url, ExchangeRateApiError> {
        let invalid = |reason: String| ExchangeRateApiError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };
        let mut url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        let amount = amount.to_string();
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base URI".to_string()))?
            .clear()
            .extend(["v6", api_key, "pair", from.code(), to.code(), amount.as_str()]);
        Ok(url)
    }
}

fn conversion_result(body: &str) -> Result<Decimal, ExchangeRateApiError> {
    let response: PairResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            debug!(error = %e, "ExchangeRate-API returned a malformed body");
            return Err(ExchangeRateApiError::Api { error_type: None });
        }
    };

    if response.result.as_deref() != Some(SUCCESS) {
        return Err(ExchangeRateApiError::Api {
            error_type: response.error_type,
        });
    }

    match response.conversion_result {
        Some(serde_json::Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(serde_json::Value::String(s)) => parse_decimal(&s),
        _ => None,
    }
    .ok_or(ExchangeRateApiError::MissingConversionResult)
}
