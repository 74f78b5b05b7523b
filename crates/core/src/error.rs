//! Currency parse errors.

use thiserror::Error;

/// Errors that can occur while parsing an ISO 4217 currency code.
///
/// Resolution misses (a region or tag that determines no currency) are
/// not errors; they are reported as `Option::None` or
/// [`Confidence::No`](crate::tag::Confidence::No).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIsoError {
    /// Input was not exactly 3 bytes long.
    #[error("Currency code must be exactly 3 letters, got {0} bytes")]
    InvalidLength(usize),

    /// Input contained a byte that is not an ASCII letter.
    #[error("Currency code must contain only ASCII letters")]
    NotAlphabetic,

    /// Input was well-formed but is not a recognized ISO 4217 code.
    #[error("Unrecognized currency code: {0}")]
    UnknownCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseIsoError::InvalidLength(2).to_string(),
            "Currency code must be exactly 3 letters, got 2 bytes"
        );
        assert_eq!(
            ParseIsoError::NotAlphabetic.to_string(),
            "Currency code must contain only ASCII letters"
        );
        assert_eq!(
            ParseIsoError::UnknownCode("UUU".to_string()).to_string(),
            "Unrecognized currency code: UUU"
        );
    }
}
