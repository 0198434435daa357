//! # Xrate Client
//!
//! A typed client for the default conversion rate API.
//!
//! The client asks the remote service for a single point-in-time rate. When
//! the service answers without a usable rate (error status, missing key,
//! malformed body) the client reports `Ok(None)` so the caller can apply one
//! uniform error policy. Only configuration faults (an endpoint that is not a
//! valid URI) and transport faults are returned as errors.

use reqwest::{Client, Url};
use tracing::debug;
use xrate_types::{CurrencyCode, Decimal, parse_decimal};

/// Endpoint used when the configuration does not name one.
pub const DEFAULT_ENDPOINT: &str = "https://free.currconv.com/api/v7/convert";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid endpoint URI '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Port for anything that can look up a conversion rate.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Returns how many units of `to` one unit of `from` buys, or `None`
    /// when the provider has no usable rate.
    async fn conversion_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        api_key: &str,
    ) -> Result<Option<Decimal>, ClientError>;
}

/// Client for the query-parameter rate API.
///
/// Requests look like `{endpoint}?q=USD_GBP&apiKey={key}&compact=ultra` and
/// the response is a JSON object mapping `"USD_GBP"` to the rate.
pub struct CurrConvClient {
    endpoint: String,
    http: Client,
}

impl CurrConvClient {
    /// Creates a new client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http(endpoint, Client::new())
    }

    /// Creates a client on top of an existing `reqwest` client.
    pub fn with_http(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    fn build_url(&self, from: CurrencyCode, to: CurrencyCode, api_key: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("q", &pair_key(from, to))
            .append_pair("apiKey", api_key)
            .append_pair("compact", "ultra");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RateSource for CurrConvClient {
    async fn conversion_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        api_key: &str,
    ) -> Result<Option<Decimal>, ClientError> {
        let url = self.build_url(from, to, api_key)?;
        debug!(endpoint = %self.endpoint, pair = %pair_key(from, to), "requesting conversion rate");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "rate service returned a non-success status");
            return Ok(None);
        }

        let body = resp.text().await?;
        Ok(parse_rate(&body, from, to))
    }
}

/// Key the service uses for a currency pair, e.g. `USD_GBP`.
pub fn pair_key(from: CurrencyCode, to: CurrencyCode) -> String {
    format!("{}_{}", from, to)
}

fn parse_rate(body: &str, from: CurrencyCode, to: CurrencyCode) -> Option<Decimal> {
    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) => {
            debug!(error = %e, "rate service returned a malformed body");
            return None;
        }
    };

    let Some(value) = json.get(pair_key(from, to)) else {
        debug!("The exchange rate of {} to {} is not found", from, to);
        return None;
    };

    // Numbers keep their original text, so no float rounding happens here.
    let rate = match value {
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
        serde_json::Value::String(s) => parse_decimal(s),
        _ => None,
    };
    if rate.is_none() {
        debug!(%value, "rate for {} to {} is not a number", from, to);
    }
    rate
}
