//! Error types for the currency converter.

/// Boxed cause carried by conversion errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of fixed-precision decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Decimal overflow")]
    Overflow,
}

/// Domain-level conversion failure.
///
/// Every way a conversion can fail surfaces as this one error kind and is
/// told apart by its message. Causes are kept as the error source so callers
/// can report them.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The built-in provider could not supply a rate.
    #[error("Could not convert currency using default third-party API.")]
    DefaultProvider {
        #[source]
        source: Option<BoxError>,
    },

    /// A converter completed without producing a result.
    #[error("Error: converter did not return any result")]
    MissingResult,

    /// A plugin-supplied converter failed.
    #[error("{message}")]
    Provider {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl ConversionError {
    /// Provider failure carrying only a message.
    pub fn provider(message: impl Into<String>) -> Self {
        ConversionError::Provider {
            message: message.into(),
            source: None,
        }
    }
}
