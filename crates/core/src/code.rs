//! The `Currency` value type and the ISO 4217 parser.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::data;
use crate::error::ParseIsoError;

/// An ISO 4217 alphabetic currency code.
///
/// A `Currency` is a compact value type holding the canonical 3-letter
/// uppercase code. Every value is validated against the code table at
/// construction, either through [`parse_iso`] or through the exported
/// constants, so holding one is proof the code is recognized.
///
/// The sentinel [`XXX`] (ISO's own "no currency") is a valid, well-formed
/// value and the result on resolution-miss paths; it is also the
/// `Default`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency([u8; 3]);

/// US Dollar.
pub const USD: Currency = Currency(*b"USD");
/// Euro.
pub const EUR: Currency = Currency(*b"EUR");
/// Japanese Yen.
pub const JPY: Currency = Currency(*b"JPY");
/// British Pound.
pub const GBP: Currency = Currency(*b"GBP");
/// Swiss Franc.
pub const CHF: Currency = Currency(*b"CHF");
/// Australian Dollar.
pub const AUD: Currency = Currency(*b"AUD");
/// New Zealand Dollar.
pub const NZD: Currency = Currency(*b"NZD");
/// Canadian Dollar.
pub const CAD: Currency = Currency(*b"CAD");
/// Swedish Krona.
pub const SEK: Currency = Currency(*b"SEK");
/// Norwegian Krone.
pub const NOK: Currency = Currency(*b"NOK");
/// Danish Krone.
pub const DKK: Currency = Currency(*b"DKK");
/// Chinese Yuan.
pub const CNY: Currency = Currency(*b"CNY");
/// Hong Kong Dollar.
pub const HKD: Currency = Currency(*b"HKD");
/// Singapore Dollar.
pub const SGD: Currency = Currency(*b"SGD");
/// New Taiwan Dollar.
pub const TWD: Currency = Currency(*b"TWD");
/// South Korean Won.
pub const KRW: Currency = Currency(*b"KRW");
/// Indian Rupee.
pub const INR: Currency = Currency(*b"INR");
/// Indonesian Rupiah.
pub const IDR: Currency = Currency(*b"IDR");
/// Brazilian Real.
pub const BRL: Currency = Currency(*b"BRL");
/// Mexican Peso.
pub const MXN: Currency = Currency(*b"MXN");
/// Code reserved for testing purposes (ISO 4217).
pub const XTS: Currency = Currency(*b"XTS");
/// No currency (ISO 4217 sentinel).
pub const XXX: Currency = Currency(*b"XXX");

impl Currency {
    /// Builds a currency from canonical table bytes. Callers must pass
    /// bytes taken from a code-table row.
    pub(crate) const fn from_table(code: [u8; 3]) -> Self {
        Self(code)
    }

    /// The canonical 3-letter uppercase code, e.g. `"USD"`.
    #[must_use]
    pub fn code(&self) -> &str {
        // Always 3 uppercase ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }

    /// The 1-based position of this currency in the code table, for
    /// compatibility with external numeric-ID schemes. Position 0 is
    /// reserved and never returned for a recognized code.
    #[must_use]
    pub fn index(&self) -> usize {
        data::lookup_index(self.0).unwrap_or(0)
    }

    pub(crate) const fn bytes(&self) -> [u8; 3] {
        self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        XXX
    }
}

impl std::fmt::Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Currency({})", self.code())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = ParseIsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_iso(&text).map_err(D::Error::custom)
    }
}

/// Parses and validates an ISO 4217 alphabetic currency code.
///
/// The input must be exactly three ASCII letters (any case) and its
/// uppercase form must be present in the code table. The returned value
/// carries the canonical uppercase form.
///
/// # Errors
///
/// Returns [`ParseIsoError`] for inputs of the wrong length, inputs with
/// non-letter bytes, and well-formed but unrecognized codes.
pub fn parse_iso(text: &str) -> Result<Currency, ParseIsoError> {
    let &[a, b, c] = text.as_bytes() else {
        return Err(ParseIsoError::InvalidLength(text.len()));
    };
    if !(a.is_ascii_alphabetic() && b.is_ascii_alphabetic() && c.is_ascii_alphabetic()) {
        return Err(ParseIsoError::NotAlphabetic);
    }
    let code = [
        a.to_ascii_uppercase(),
        b.to_ascii_uppercase(),
        c.to_ascii_uppercase(),
    ];
    match data::lookup_index(code) {
        Some(_) => Ok(Currency(code)),
        None => Err(ParseIsoError::UnknownCode(
            std::str::from_utf8(&code).unwrap_or("XXX").to_string(),
        )),
    }
}

/// Parses a currency code known to be valid, aborting on failure.
///
/// Reserved for compile-time-known literals such as test fixtures and
/// configuration defaults. Never call this with untrusted input; use
/// [`parse_iso`] instead.
///
/// # Panics
///
/// Panics if `text` is not a recognized ISO 4217 code.
#[must_use]
pub fn must_parse_iso(text: &str) -> Currency {
    match parse_iso(text) {
        Ok(currency) => currency,
        Err(err) => panic!("invalid currency literal {text:?}: {err}"),
    }
}
