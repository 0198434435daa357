//! ExchangeRate-API error vocabulary.

/// Error type for ExchangeRate-API calls.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeRateApiError {
    #[error("Invalid endpoint URI '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with something other than `"result": "success"`.
    #[error("{}", describe_error_type(.error_type.as_deref()))]
    Api { error_type: Option<String> },

    #[error("Response does not contain a conversion result")]
    MissingConversionResult,
}

impl ExchangeRateApiError {
    pub fn is_invalid_endpoint(&self) -> bool {
        matches!(self, ExchangeRateApiError::InvalidEndpoint { .. })
    }
}

/// Human-readable text for an `error-type` reported by the service.
pub fn describe_error_type(error_type: Option<&str>) -> &'static str {
    match error_type {
        Some("unsupported-code") => "The supplied currency code is not supported",
        Some("malformed-request") => "Some part of the request doesn't follow the expected structure",
        Some("invalid-key") => "Your API key is not valid",
        Some("inactive-account") => "Your email address wasn't confirmed",
        Some("quota-reached") => "Your account has reached the number of requests allowed by your plan",
        _ => "Unknown error",
    }
}
