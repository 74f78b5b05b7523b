//! Deployment configuration for the resolvers.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::code::{self, parse_iso, Currency};

/// Resolver configuration.
///
/// The only knob is the deployment default currency, returned with low
/// confidence for the undetermined (`und`) tag.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// ISO 4217 code of the deployment default currency.
    #[serde(default = "default_currency_code")]
    pub default_currency: String,
}

fn default_currency_code() -> String {
    "USD".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency_code(),
        }
    }
}

impl ResolverConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Reads the optional `config/default` file, then environment
    /// variables under the `TENDER` prefix (`TENDER__DEFAULT_CURRENCY`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("TENDER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

static CONFIG: Lazy<ResolverConfig> = Lazy::new(|| ResolverConfig::load().unwrap_or_default());

/// The configured deployment default currency.
///
/// An unparseable configured value degrades to USD rather than failing
/// the caller.
pub(crate) fn default_currency() -> Currency {
    match parse_iso(&CONFIG.default_currency) {
        Ok(currency) => currency,
        Err(err) => {
            tracing::warn!(
                value = %CONFIG.default_currency,
                %err,
                "invalid configured default currency, using USD"
            );
            code::USD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.default_currency, "USD");
    }

    #[test]
    fn test_default_currency_parses() {
        assert_eq!(default_currency(), code::USD);
    }
}
