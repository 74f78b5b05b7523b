//! Validated region identifiers.

use crate::error::LocaleError;

/// A validated region identifier.
///
/// Either an ISO 3166-1 alpha-2 code (`"NL"`, `"ZZ"`) or a UN M.49
/// numeric-3 code (`"419"`, `"150"`). Alpha codes are normalized to
/// uppercase; identifiers are stable and comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region {
    buf: [u8; 3],
    len: u8,
}

impl Region {
    /// Parses a region identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::MalformedRegion`] if the input is not two
    /// ASCII letters or three ASCII digits.
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        match s.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => Ok(Self {
                buf: [a.to_ascii_uppercase(), b.to_ascii_uppercase(), 0],
                len: 2,
            }),
            [a, b, c] if a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit() => {
                Ok(Self {
                    buf: [*a, *b, *c],
                    len: 3,
                })
            }
            _ => Err(LocaleError::MalformedRegion(s.to_string())),
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Bytes are validated ASCII at construction.
        std::str::from_utf8(&self.buf[..usize::from(self.len)]).unwrap_or("")
    }

    /// Returns true for UN M.49 numeric-3 identifiers.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.len == 3
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alpha_normalizes_case() {
        let region = Region::parse("nl").unwrap();
        assert_eq!(region.as_str(), "NL");
        assert_eq!(region, Region::parse("NL").unwrap());
        assert!(!region.is_numeric());
    }

    #[test]
    fn test_parse_numeric() {
        let region = Region::parse("419").unwrap();
        assert_eq!(region.as_str(), "419");
        assert!(region.is_numeric());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "N", "NLD", "N1", "41", "4199", "??", "\u{22a9}\u{22a9}"] {
            assert!(Region::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_display_roundtrip() {
        let region = Region::parse("be").unwrap();
        assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
    }
}
