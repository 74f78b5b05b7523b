//! Region-to-currency resolution.

use chrono::Datelike;
use tender_locale::Region;

use crate::code::Currency;
use crate::data;

/// Outcome of resolving a region against the association table.
///
/// The public surface collapses this to an `Option`, but the distinction
/// between "deliberately has no currency" and "not covered" is kept here
/// so the table semantics stay intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegionStatus {
    /// The region has a current official currency.
    Tender(Currency),
    /// The region deliberately has no official currency.
    ExplicitlyNone,
    /// The region has no rows, or all rows have expired.
    NotCovered,
}

/// Today as a packed `yyyymmdd` integer, the format of the table's
/// validity windows.
fn today() -> i32 {
    let now = chrono::Utc::now().date_naive();
    now.year() * 10_000
        + i32::try_from(now.month()).unwrap_or(1) * 100
        + i32::try_from(now.day()).unwrap_or(1)
}

fn is_current(row: &data::RegionRow, today: i32) -> bool {
    row.from <= today && (row.to == 0 || today < row.to)
}

pub(crate) fn resolve(region: Region) -> RegionStatus {
    let today = today();
    for row in data::region_rows(region.as_str()) {
        if !is_current(row, today) {
            continue;
        }
        // First currently valid row wins; the table is pre-ordered so the
        // canonical entry sorts first.
        if !row.tender {
            return RegionStatus::ExplicitlyNone;
        }
        return RegionStatus::Tender(Currency::from_table(row.currency));
    }
    RegionStatus::NotCovered
}

/// Resolves the current official currency of a region.
///
/// Returns `None` both for regions the table does not cover (or whose
/// associations have all expired) and for regions that deliberately have
/// no official currency. Absence is a normal outcome, not an error;
/// callers that need the ISO sentinel can use
/// `from_region(r).unwrap_or(XXX)`.
#[must_use]
pub fn from_region(region: Region) -> Option<Currency> {
    match resolve(region) {
        RegionStatus::Tender(currency) => Some(currency),
        RegionStatus::ExplicitlyNone | RegionStatus::NotCovered => {
            tracing::debug!(%region, "no current currency for region");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn region(s: &str) -> Region {
        Region::parse(s).unwrap()
    }

    #[rstest]
    #[case("NL", "EUR")]
    #[case("BE", "EUR")]
    #[case("AG", "XCD")]
    #[case("CH", "CHF")]
    #[case("CU", "CUP")] // first of multiple current currencies
    #[case("DG", "USD")] // dependent territory, resolves via normal row
    #[case("LI", "CHF")]
    #[case("XK", "EUR")]
    fn test_from_region_resolves(#[case] input: &str, #[case] expected: &str) {
        let currency = from_region(region(input)).unwrap();
        assert_eq!(currency.code(), expected);
    }

    #[rstest]
    #[case("150")] // continent code, not covered
    #[case("CP")] // explicitly no currency
    #[case("CS")] // all associations expired
    #[case("ZZ")] // unknown region
    fn test_from_region_misses(#[case] input: &str) {
        assert_eq!(from_region(region(input)), None);
    }

    #[test]
    fn test_tri_state_is_preserved_internally() {
        assert_eq!(resolve(region("CP")), RegionStatus::ExplicitlyNone);
        assert_eq!(resolve(region("ZZ")), RegionStatus::NotCovered);
        assert_eq!(resolve(region("CS")), RegionStatus::NotCovered);
        assert!(matches!(resolve(region("NL")), RegionStatus::Tender(_)));
    }

    #[test]
    fn test_expired_row_is_skipped_for_successor() {
        // Croatia switched to the euro in 2023; the kuna row has expired.
        let currency = from_region(region("HR")).unwrap();
        assert_eq!(currency.code(), "EUR");
    }

    #[test]
    fn test_validity_window_arithmetic() {
        let row = data::RegionRow {
            region: "QQ",
            currency: *b"USD",
            from: 20200101,
            to: 20210101,
            tender: true,
        };
        assert!(!is_current(&row, 20191231));
        assert!(is_current(&row, 20200101));
        assert!(is_current(&row, 20201231));
        assert!(!is_current(&row, 20210101));
    }
}
