//! Tests for language-tag parsing.

use rstest::rstest;

use crate::region::Region;
use crate::tag::LanguageTag;

fn parse(text: &str) -> LanguageTag {
    LanguageTag::parse(text).unwrap()
}

#[test]
fn test_language_only() {
    let tag = parse("nl");
    assert_eq!(tag.language(), "nl");
    assert_eq!(tag.script(), None);
    assert_eq!(tag.region(), None);
    assert_eq!(tag.currency_override(), None);
    assert!(!tag.is_undetermined());
}

#[test]
fn test_language_region() {
    let tag = parse("nl-BE");
    assert_eq!(tag.language(), "nl");
    assert_eq!(tag.region(), Some(Region::parse("BE").unwrap()));
}

#[test]
fn test_numeric_region() {
    let tag = parse("es-419");
    assert_eq!(tag.language(), "es");
    assert_eq!(tag.region(), Some(Region::parse("419").unwrap()));
}

#[test]
fn test_script_and_region() {
    let tag = parse("zh-Hant-TW");
    assert_eq!(tag.language(), "zh");
    assert_eq!(tag.script(), Some("Hant"));
    assert_eq!(tag.region(), Some(Region::parse("TW").unwrap()));
}

#[test]
fn test_currency_extension() {
    let tag = parse("en-u-cu-eur");
    assert_eq!(tag.language(), "en");
    assert_eq!(tag.region(), None);
    assert_eq!(tag.currency_override(), Some("eur"));
}

#[test]
fn test_currency_extension_with_region() {
    let tag = parse("en-US-u-cu-jpy");
    assert_eq!(tag.region(), Some(Region::parse("US").unwrap()));
    assert_eq!(tag.currency_override(), Some("jpy"));
}

#[test]
fn test_other_extension_keys_skipped() {
    let tag = parse("en-u-ca-gregory-cu-usd-nu-latn");
    assert_eq!(tag.currency_override(), Some("usd"));
}

#[test]
fn test_undetermined() {
    let tag = parse("und");
    assert!(tag.is_undetermined());
    assert_eq!(tag.region(), None);
}

#[test]
fn test_case_and_separator_insensitive() {
    assert_eq!(parse("NL_be"), parse("nl-BE"));
    assert_eq!(parse("EN-U-CU-EUR"), parse("en-u-cu-eur"));
}

#[rstest]
#[case("")]
#[case("x")]
#[case("toolong")]
#[case("12-US")]
#[case("-US")]
fn test_rejects_malformed(#[case] text: &str) {
    assert!(LanguageTag::parse(text).is_err(), "accepted {text:?}");
}

#[rstest]
#[case("nl", "nl")]
#[case("nl-BE", "nl-BE")]
#[case("zh-hant-tw", "zh-Hant-TW")]
#[case("en-u-cu-eur", "en-u-cu-eur")]
fn test_display_canonical(#[case] text: &str, #[case] canonical: &str) {
    assert_eq!(parse(text).to_string(), canonical);
}
