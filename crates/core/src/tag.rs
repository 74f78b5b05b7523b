//! Locale-tag-to-currency resolution.
//!
//! Currency inference from a locale tag is inherently probabilistic, so
//! every result carries a [`Confidence`] rather than a boolean.

use serde::{Deserialize, Serialize};
use tender_locale::LanguageTag;

use crate::code::{self, parse_iso, Currency};
use crate::config;
use crate::data;
use crate::region::from_region;

/// How certain a locale-to-currency inference is.
///
/// Ordered: `No < Low < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// The tag determines no currency.
    No,
    /// Inferred from the language alone, which only weakly predicts the
    /// currency.
    Low,
    /// Backed by an explicit extension or a resolved region.
    Exact,
}

/// Resolves the likely currency for a language tag, using the configured
/// deployment default for the undetermined tag.
///
/// Precedence, strict and ordered:
/// 1. an explicit `u-cu-` currency extension that parses as a valid ISO
///    code wins outright (`Exact`), regardless of region;
/// 2. a region that resolves via [`from_region`] (`Exact`);
/// 3. the base-language fallback table (`Low`);
/// 4. the undetermined tag resolves to the deployment default (`Low`);
/// 5. otherwise the sentinel `XXX` with [`Confidence::No`].
#[must_use]
pub fn from_tag(tag: &LanguageTag) -> (Currency, Confidence) {
    from_tag_with_default(tag, config::default_currency())
}

/// Like [`from_tag`], with an explicit default currency for the
/// undetermined tag.
#[must_use]
pub fn from_tag_with_default(tag: &LanguageTag, default: Currency) -> (Currency, Confidence) {
    if let Some(raw) = tag.currency_override() {
        // An invalid extension is ignored, not an error; resolution
        // continues with the region and language.
        match parse_iso(raw) {
            Ok(currency) => return (currency, Confidence::Exact),
            Err(err) => tracing::debug!(%tag, raw, %err, "ignoring invalid currency extension"),
        }
    }
    if let Some(region) = tag.region() {
        if let Some(currency) = from_region(region) {
            return (currency, Confidence::Exact);
        }
    }
    if tag.is_undetermined() {
        return (default, Confidence::Low);
    }
    if let Some(code) = data::language_currency(tag.language()) {
        return (Currency::from_table(code), Confidence::Low);
    }
    tracing::debug!(%tag, "tag determines no currency");
    (code::XXX, Confidence::No)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::code::{EUR, USD, XXX};

    fn tag(text: &str) -> LanguageTag {
        LanguageTag::parse(text).unwrap()
    }

    #[rstest]
    #[case("nl", "EUR", Confidence::Low)] // nl is also spoken outside euro land
    #[case("nl-BE", "EUR", Confidence::Exact)] // region is known
    #[case("pt", "BRL", Confidence::Low)]
    #[case("en", "USD", Confidence::Low)]
    #[case("en-u-cu-eur", "EUR", Confidence::Exact)]
    #[case("en-US-u-cu-jpy", "JPY", Confidence::Exact)] // extension beats region
    #[case("zh-Hant-TW", "TWD", Confidence::Exact)]
    #[case("tlh", "XXX", Confidence::No)] // Klingon has no country
    fn test_from_tag(#[case] text: &str, #[case] currency: &str, #[case] conf: Confidence) {
        let (cur, got) = from_tag(&tag(text));
        assert_eq!((cur.code(), got), (currency, conf), "{text}");
    }

    #[test]
    fn test_undetermined_uses_default() {
        assert_eq!(from_tag(&tag("und")), (USD, Confidence::Low));
        assert_eq!(
            from_tag_with_default(&tag("und"), EUR),
            (EUR, Confidence::Low)
        );
    }

    #[test]
    fn test_failed_region_falls_back_to_language() {
        // 419 (Latin America) has no single currency, but the base
        // language still carries a weak association.
        assert_eq!(from_tag(&tag("es-419")), (EUR, Confidence::Low));
    }

    #[test]
    fn test_failed_region_and_unknown_language_misses() {
        assert_eq!(from_tag(&tag("tlh-CP")), (XXX, Confidence::No));
    }

    #[test]
    fn test_invalid_extension_is_ignored() {
        let (cur, conf) = from_tag(&tag("nl-BE-u-cu-uuu"));
        assert_eq!((cur, conf), (EUR, Confidence::Exact));
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::No < Confidence::Low);
        assert!(Confidence::Low < Confidence::Exact);
    }

    #[test]
    fn test_confidence_serde() {
        assert_eq!(
            serde_json::to_string(&Confidence::Exact).unwrap(),
            "\"exact\""
        );
        let back: Confidence = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(back, Confidence::Low);
    }
}
