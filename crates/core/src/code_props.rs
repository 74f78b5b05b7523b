//! Property-based tests for ISO parsing and rounding lookups.

use proptest::prelude::*;

use crate::code::parse_iso;
use crate::data;
use crate::rounding::Kind;

/// Strategy for arbitrary 3-letter ASCII strings, mixed case.
fn three_letters() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{3}").unwrap()
}

/// Strategy for strings of the wrong length.
fn wrong_length() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{0,2}|[A-Za-z]{4,8}").unwrap()
}

/// Strategy for a currency drawn from the real table rows.
fn table_currency() -> impl Strategy<Value = crate::Currency> {
    (1..=data::NUM_CURRENCIES).prop_map(|index| {
        let row = &data::CURRENCIES[index];
        crate::Currency::from_table(row.code)
    })
}

proptest! {
    /// Parsing succeeds exactly when the uppercase form is a table member,
    /// and the parsed code renders as that uppercase form.
    #[test]
    fn prop_parse_iff_table_member(input in three_letters()) {
        let upper = input.to_ascii_uppercase();
        let mut code = [0u8; 3];
        code.copy_from_slice(upper.as_bytes());
        let in_table = data::lookup_index(code).is_some();
        match parse_iso(&input) {
            Ok(currency) => {
                prop_assert!(in_table, "{input} parsed but is not in the table");
                prop_assert_eq!(currency.code(), upper.as_str());
            }
            Err(_) => prop_assert!(!in_table, "{} rejected but is in the table", input),
        }
    }

    /// Re-parsing the rendered form of a parsed code is a fixpoint.
    #[test]
    fn prop_reparse_fixpoint(input in three_letters()) {
        if let Ok(currency) = parse_iso(&input) {
            let again = parse_iso(currency.code());
            prop_assert_eq!(again.unwrap(), currency);
        }
    }

    /// Inputs of the wrong length never parse.
    #[test]
    fn prop_wrong_length_rejected(input in wrong_length()) {
        prop_assert!(parse_iso(&input).is_err());
    }

    /// Rounding is total over the table: sane scales, known increments,
    /// and the cash rule is never finer than the standard rule.
    #[test]
    fn prop_rounding_total(currency in table_currency()) {
        for kind in [Kind::Standard, Kind::Cash] {
            let (scale, increment) = kind.rounding(currency);
            prop_assert!(scale <= 4, "{currency} {kind:?} scale {scale}");
            prop_assert!(increment == 1 || increment == 5);
        }
        let (standard_scale, _) = Kind::Standard.rounding(currency);
        let (cash_scale, _) = Kind::Cash.rounding(currency);
        prop_assert!(cash_scale <= standard_scale, "{currency} cash finer than standard");
    }
}
