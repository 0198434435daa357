//! Currency converter port.
//!
//! This trait is the contract every provider satisfies, whether it is the
//! built-in HTTP converter or a plugin discovered at startup.

use rust_decimal::Decimal;

use crate::{ConversionError, ConversionResult, CurrencyCode};

/// Port trait for currency converters.
#[async_trait::async_trait]
pub trait CurrencyConverter: Send + Sync {
    /// Short provider name, used when logging which converter was selected.
    fn name(&self) -> &str;

    /// Sets the credentials used for authentication, if there is any.
    /// Called at most once, before the first `convert`. Providers without an
    /// authentication requirement accept and ignore it.
    fn set_auth_credentials(&mut self, credentials: &str);

    /// Converts `amount` from one currency to another.
    ///
    /// A well-behaved provider always returns `Ok(Some(_))` or an error.
    /// `Ok(None)` is a contract violation that the resolving layer rejects
    /// with [`ConversionError::MissingResult`].
    async fn convert(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
    ) -> Result<Option<ConversionResult>, ConversionError>;
}
