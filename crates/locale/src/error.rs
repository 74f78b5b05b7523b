//! Locale parse errors.

use thiserror::Error;

/// Errors that can occur while parsing locale input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// Region is not two ASCII letters or three ASCII digits.
    #[error("Malformed region: {0:?}")]
    MalformedRegion(String),

    /// Tag does not start with a well-formed language subtag.
    #[error("Malformed language subtag: {0:?}")]
    MalformedLanguage(String),

    /// Tag is empty.
    #[error("Empty language tag")]
    EmptyTag,
}
