//! Static ISO 4217 and CLDR-derived reference tables.
//!
//! Everything in this module is compile-time-initialized immutable data:
//! the sorted currency code table, the region-to-currency association
//! table, the language fallback table, and the rounding-exception list.
//! There are no writers, so lookups need no locking.

/// One row of the currency code table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CurrencyRow {
    /// Canonical 3-letter uppercase code.
    pub(crate) code: [u8; 3],
    /// Index into [`ROUNDING`]; 0 is the default rule.
    pub(crate) rounding: u8,
}

/// A decimal scale plus the minimal increment at that scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RoundingRule {
    pub(crate) scale: u32,
    pub(crate) increment: u32,
}

/// Standard and cash rules for one rounding-exception class.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RoundingPair {
    pub(crate) standard: RoundingRule,
    pub(crate) cash: RoundingRule,
}

/// One region-to-currency association.
///
/// `from` and `to` are packed `yyyymmdd` dates; 0 means open-ended. Rows
/// are sorted by region, and rows sharing a region keep their
/// authoritative order: the first currently valid row wins. A row with
/// `tender: false` marks a region that deliberately has no official
/// currency, which is distinct from a region with no rows at all.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionRow {
    pub(crate) region: &'static str,
    pub(crate) currency: [u8; 3],
    pub(crate) from: i32,
    pub(crate) to: i32,
    pub(crate) tender: bool,
}

/// One language-to-currency fallback association, sorted by language.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LanguageRow {
    pub(crate) language: &'static str,
    pub(crate) currency: [u8; 3],
}

const fn cur(code: &[u8; 3], rounding: u8) -> CurrencyRow {
    CurrencyRow {
        code: *code,
        rounding,
    }
}

const fn reg(region: &'static str, currency: &[u8; 3], from: i32, to: i32, tender: bool) -> RegionRow {
    RegionRow {
        region,
        currency: *currency,
        from,
        to,
        tender,
    }
}

const fn lang(language: &'static str, currency: &[u8; 3]) -> LanguageRow {
    LanguageRow {
        language,
        currency: *currency,
    }
}

const fn rule(scale: u32, increment: u32) -> RoundingRule {
    RoundingRule { scale, increment }
}

const fn pair(standard: RoundingRule, cash: RoundingRule) -> RoundingPair {
    RoundingPair { standard, cash }
}

// Rounding-exception tags referenced by the code table rows.
pub(crate) const DEFAULT_ROUNDING: u8 = 0;
const ZERO_DECIMAL: u8 = 1;
const THREE_DECIMAL: u8 = 2;
const FOUR_DECIMAL: u8 = 3;
const NICKEL_CASH: u8 = 4;
const WHOLE_UNIT_CASH: u8 = 5;

/// Rounding-exception classes, indexed by the tag on each currency row.
pub(crate) static ROUNDING: &[RoundingPair] = &[
    pair(rule(2, 1), rule(2, 1)), // default: two decimals, unit increments
    pair(rule(0, 1), rule(0, 1)), // no decimal digits (JPY, ISK, ...)
    pair(rule(3, 1), rule(3, 1)), // three decimal digits (BHD, KWD, ...)
    pair(rule(4, 1), rule(4, 1)), // four decimal digits (CLF)
    pair(rule(2, 1), rule(2, 5)), // cash rounds to 5-unit increments (CHF)
    pair(rule(2, 1), rule(0, 1)), // cash drops decimals (TWD, CZK, ...)
];

/// Number of real rows in [`CURRENCIES`]; row 0 is reserved so real rows
/// are 1-indexed for external numeric-ID schemes.
pub(crate) const NUM_CURRENCIES: usize = 302;

/// Position of `code` in [`CURRENCIES`], if it is a recognized currency.
pub(crate) fn lookup_index(code: [u8; 3]) -> Option<usize> {
    CURRENCIES.binary_search_by(|row| row.code.cmp(&code)).ok()
}

/// The table row for `code`, if it is a recognized currency.
pub(crate) fn currency_row(code: [u8; 3]) -> Option<&'static CurrencyRow> {
    lookup_index(code).map(|index| &CURRENCIES[index])
}

/// All region rows for `region`, in authoritative order. Empty for
/// regions the table does not cover.
pub(crate) fn region_rows(region: &str) -> &'static [RegionRow] {
    let start = REGION_CURRENCIES.partition_point(|row| row.region < region);
    let end = REGION_CURRENCIES.partition_point(|row| row.region <= region);
    &REGION_CURRENCIES[start..end]
}

/// The fallback currency associated with a base language, if any.
pub(crate) fn language_currency(language: &str) -> Option<[u8; 3]> {
    LANGUAGE_CURRENCIES
        .binary_search_by(|row| row.language.cmp(language))
        .ok()
        .map(|index| LANGUAGE_CURRENCIES[index].currency)
}

// 302 real currency rows
pub(crate) static CURRENCIES: &[CurrencyRow] = &[
    cur(b"\0\0\0", DEFAULT_ROUNDING), // reserved: real rows are 1-indexed
    cur(b"ADP", ZERO_DECIMAL),
    cur(b"AED", DEFAULT_ROUNDING),
    cur(b"AFA", DEFAULT_ROUNDING),
    cur(b"AFN", DEFAULT_ROUNDING),
    cur(b"ALK", DEFAULT_ROUNDING),
    cur(b"ALL", DEFAULT_ROUNDING),
    cur(b"AMD", DEFAULT_ROUNDING),
    cur(b"ANG", DEFAULT_ROUNDING),
    cur(b"AOA", DEFAULT_ROUNDING),
    cur(b"AOK", DEFAULT_ROUNDING),
    cur(b"AON", DEFAULT_ROUNDING),
    cur(b"AOR", DEFAULT_ROUNDING),
    cur(b"ARA", DEFAULT_ROUNDING),
    cur(b"ARL", DEFAULT_ROUNDING),
    cur(b"ARM", DEFAULT_ROUNDING),
    cur(b"ARP", DEFAULT_ROUNDING),
    cur(b"ARS", DEFAULT_ROUNDING),
    cur(b"ATS", DEFAULT_ROUNDING),
    cur(b"AUD", DEFAULT_ROUNDING),
    cur(b"AWG", DEFAULT_ROUNDING),
    cur(b"AZM", DEFAULT_ROUNDING),
    cur(b"AZN", DEFAULT_ROUNDING),
    cur(b"BAD", DEFAULT_ROUNDING),
    cur(b"BAM", DEFAULT_ROUNDING),
    cur(b"BAN", DEFAULT_ROUNDING),
    cur(b"BBD", DEFAULT_ROUNDING),
    cur(b"BDT", DEFAULT_ROUNDING),
    cur(b"BEC", DEFAULT_ROUNDING),
    cur(b"BEF", DEFAULT_ROUNDING),
    cur(b"BEL", DEFAULT_ROUNDING),
    cur(b"BGL", DEFAULT_ROUNDING),
    cur(b"BGM", DEFAULT_ROUNDING),
    cur(b"BGN", DEFAULT_ROUNDING),
    cur(b"BGO", DEFAULT_ROUNDING),
    cur(b"BHD", THREE_DECIMAL),
    cur(b"BIF", ZERO_DECIMAL),
    cur(b"BMD", DEFAULT_ROUNDING),
    cur(b"BND", DEFAULT_ROUNDING),
    cur(b"BOB", DEFAULT_ROUNDING),
    cur(b"BOL", DEFAULT_ROUNDING),
    cur(b"BOP", DEFAULT_ROUNDING),
    cur(b"BOV", DEFAULT_ROUNDING),
    cur(b"BRB", DEFAULT_ROUNDING),
    cur(b"BRC", DEFAULT_ROUNDING),
    cur(b"BRE", DEFAULT_ROUNDING),
    cur(b"BRL", DEFAULT_ROUNDING),
    cur(b"BRN", DEFAULT_ROUNDING),
    cur(b"BRR", DEFAULT_ROUNDING),
    cur(b"BRZ", DEFAULT_ROUNDING),
    cur(b"BSD", DEFAULT_ROUNDING),
    cur(b"BTN", DEFAULT_ROUNDING),
    cur(b"BUK", DEFAULT_ROUNDING),
    cur(b"BWP", DEFAULT_ROUNDING),
    cur(b"BYB", DEFAULT_ROUNDING),
    cur(b"BYN", DEFAULT_ROUNDING),
    cur(b"BYR", ZERO_DECIMAL),
    cur(b"BZD", DEFAULT_ROUNDING),
    cur(b"CAD", DEFAULT_ROUNDING),
    cur(b"CDF", DEFAULT_ROUNDING),
    cur(b"CHE", DEFAULT_ROUNDING),
    cur(b"CHF", NICKEL_CASH),
    cur(b"CHW", DEFAULT_ROUNDING),
    cur(b"CLE", DEFAULT_ROUNDING),
    cur(b"CLF", FOUR_DECIMAL),
    cur(b"CLP", ZERO_DECIMAL),
    cur(b"CNX", DEFAULT_ROUNDING),
    cur(b"CNY", DEFAULT_ROUNDING),
    cur(b"COP", DEFAULT_ROUNDING),
    cur(b"COU", DEFAULT_ROUNDING),
    cur(b"CRC", DEFAULT_ROUNDING),
    cur(b"CSD", DEFAULT_ROUNDING),
    cur(b"CSK", DEFAULT_ROUNDING),
    cur(b"CUC", DEFAULT_ROUNDING),
    cur(b"CUP", DEFAULT_ROUNDING),
    cur(b"CVE", DEFAULT_ROUNDING),
    cur(b"CYP", DEFAULT_ROUNDING),
    cur(b"CZK", WHOLE_UNIT_CASH),
    cur(b"DDM", DEFAULT_ROUNDING),
    cur(b"DEM", DEFAULT_ROUNDING),
    cur(b"DJF", ZERO_DECIMAL),
    cur(b"DKK", DEFAULT_ROUNDING),
    cur(b"DOP", DEFAULT_ROUNDING),
    cur(b"DZD", DEFAULT_ROUNDING),
    cur(b"ECS", DEFAULT_ROUNDING),
    cur(b"ECV", DEFAULT_ROUNDING),
    cur(b"EEK", DEFAULT_ROUNDING),
    cur(b"EGP", DEFAULT_ROUNDING),
    cur(b"ERN", DEFAULT_ROUNDING),
    cur(b"ESA", DEFAULT_ROUNDING),
    cur(b"ESB", DEFAULT_ROUNDING),
    cur(b"ESP", ZERO_DECIMAL),
    cur(b"ETB", DEFAULT_ROUNDING),
    cur(b"EUR", DEFAULT_ROUNDING),
    cur(b"FIM", DEFAULT_ROUNDING),
    cur(b"FJD", DEFAULT_ROUNDING),
    cur(b"FKP", DEFAULT_ROUNDING),
    cur(b"FRF", DEFAULT_ROUNDING),
    cur(b"GBP", DEFAULT_ROUNDING),
    cur(b"GEK", DEFAULT_ROUNDING),
    cur(b"GEL", DEFAULT_ROUNDING),
    cur(b"GHC", DEFAULT_ROUNDING),
    cur(b"GHS", DEFAULT_ROUNDING),
    cur(b"GIP", DEFAULT_ROUNDING),
    cur(b"GMD", DEFAULT_ROUNDING),
    cur(b"GNF", ZERO_DECIMAL),
    cur(b"GNS", DEFAULT_ROUNDING),
    cur(b"GQE", DEFAULT_ROUNDING),
    cur(b"GRD", ZERO_DECIMAL),
    cur(b"GTQ", DEFAULT_ROUNDING),
    cur(b"GWE", DEFAULT_ROUNDING),
    cur(b"GWP", DEFAULT_ROUNDING),
    cur(b"GYD", DEFAULT_ROUNDING),
    cur(b"HKD", DEFAULT_ROUNDING),
    cur(b"HNL", DEFAULT_ROUNDING),
    cur(b"HRD", DEFAULT_ROUNDING),
    cur(b"HRK", DEFAULT_ROUNDING),
    cur(b"HTG", DEFAULT_ROUNDING),
    cur(b"HUF", WHOLE_UNIT_CASH),
    cur(b"IDR", DEFAULT_ROUNDING),
    cur(b"IEP", DEFAULT_ROUNDING),
    cur(b"ILP", DEFAULT_ROUNDING),
    cur(b"ILR", DEFAULT_ROUNDING),
    cur(b"ILS", DEFAULT_ROUNDING),
    cur(b"INR", DEFAULT_ROUNDING),
    cur(b"IQD", THREE_DECIMAL),
    cur(b"IRR", DEFAULT_ROUNDING),
    cur(b"ISJ", DEFAULT_ROUNDING),
    cur(b"ISK", ZERO_DECIMAL),
    cur(b"ITL", ZERO_DECIMAL),
    cur(b"JMD", DEFAULT_ROUNDING),
    cur(b"JOD", THREE_DECIMAL),
    cur(b"JPY", ZERO_DECIMAL),
    cur(b"KES", DEFAULT_ROUNDING),
    cur(b"KGS", DEFAULT_ROUNDING),
    cur(b"KHR", DEFAULT_ROUNDING),
    cur(b"KMF", ZERO_DECIMAL),
    cur(b"KPW", ZERO_DECIMAL),
    cur(b"KRH", DEFAULT_ROUNDING),
    cur(b"KRO", DEFAULT_ROUNDING),
    cur(b"KRW", ZERO_DECIMAL),
    cur(b"KWD", THREE_DECIMAL),
    cur(b"KYD", DEFAULT_ROUNDING),
    cur(b"KZT", DEFAULT_ROUNDING),
    cur(b"LAK", ZERO_DECIMAL),
    cur(b"LBP", ZERO_DECIMAL),
    cur(b"LKR", DEFAULT_ROUNDING),
    cur(b"LRD", DEFAULT_ROUNDING),
    cur(b"LSL", DEFAULT_ROUNDING),
    cur(b"LTL", DEFAULT_ROUNDING),
    cur(b"LTT", DEFAULT_ROUNDING),
    cur(b"LUC", DEFAULT_ROUNDING),
    cur(b"LUF", ZERO_DECIMAL),
    cur(b"LUL", DEFAULT_ROUNDING),
    cur(b"LVL", DEFAULT_ROUNDING),
    cur(b"LVR", DEFAULT_ROUNDING),
    cur(b"LYD", THREE_DECIMAL),
    cur(b"MAD", DEFAULT_ROUNDING),
    cur(b"MAF", DEFAULT_ROUNDING),
    cur(b"MCF", DEFAULT_ROUNDING),
    cur(b"MDC", DEFAULT_ROUNDING),
    cur(b"MDL", DEFAULT_ROUNDING),
    cur(b"MGA", ZERO_DECIMAL),
    cur(b"MGF", ZERO_DECIMAL),
    cur(b"MKD", DEFAULT_ROUNDING),
    cur(b"MKN", DEFAULT_ROUNDING),
    cur(b"MLF", DEFAULT_ROUNDING),
    cur(b"MMK", ZERO_DECIMAL),
    cur(b"MNT", ZERO_DECIMAL),
    cur(b"MOP", DEFAULT_ROUNDING),
    cur(b"MRO", ZERO_DECIMAL),
    cur(b"MRU", DEFAULT_ROUNDING),
    cur(b"MTL", DEFAULT_ROUNDING),
    cur(b"MTP", DEFAULT_ROUNDING),
    cur(b"MUR", DEFAULT_ROUNDING),
    cur(b"MVP", DEFAULT_ROUNDING),
    cur(b"MVR", DEFAULT_ROUNDING),
    cur(b"MWK", DEFAULT_ROUNDING),
    cur(b"MXN", DEFAULT_ROUNDING),
    cur(b"MXP", DEFAULT_ROUNDING),
    cur(b"MXV", DEFAULT_ROUNDING),
    cur(b"MYR", DEFAULT_ROUNDING),
    cur(b"MZE", DEFAULT_ROUNDING),
    cur(b"MZM", DEFAULT_ROUNDING),
    cur(b"MZN", DEFAULT_ROUNDING),
    cur(b"NAD", DEFAULT_ROUNDING),
    cur(b"NGN", DEFAULT_ROUNDING),
    cur(b"NIC", DEFAULT_ROUNDING),
    cur(b"NIO", DEFAULT_ROUNDING),
    cur(b"NLG", DEFAULT_ROUNDING),
    cur(b"NOK", DEFAULT_ROUNDING),
    cur(b"NPR", DEFAULT_ROUNDING),
    cur(b"NZD", DEFAULT_ROUNDING),
    cur(b"OMR", THREE_DECIMAL),
    cur(b"PAB", DEFAULT_ROUNDING),
    cur(b"PEI", DEFAULT_ROUNDING),
    cur(b"PEN", DEFAULT_ROUNDING),
    cur(b"PES", DEFAULT_ROUNDING),
    cur(b"PGK", DEFAULT_ROUNDING),
    cur(b"PHP", DEFAULT_ROUNDING),
    cur(b"PKR", DEFAULT_ROUNDING),
    cur(b"PLN", DEFAULT_ROUNDING),
    cur(b"PLZ", DEFAULT_ROUNDING),
    cur(b"PTE", DEFAULT_ROUNDING),
    cur(b"PYG", ZERO_DECIMAL),
    cur(b"QAR", DEFAULT_ROUNDING),
    cur(b"RHD", DEFAULT_ROUNDING),
    cur(b"ROL", DEFAULT_ROUNDING),
    cur(b"RON", DEFAULT_ROUNDING),
    cur(b"RSD", DEFAULT_ROUNDING),
    cur(b"RUB", DEFAULT_ROUNDING),
    cur(b"RUR", DEFAULT_ROUNDING),
    cur(b"RWF", ZERO_DECIMAL),
    cur(b"SAR", DEFAULT_ROUNDING),
    cur(b"SBD", DEFAULT_ROUNDING),
    cur(b"SCR", DEFAULT_ROUNDING),
    cur(b"SDD", DEFAULT_ROUNDING),
    cur(b"SDG", DEFAULT_ROUNDING),
    cur(b"SDP", DEFAULT_ROUNDING),
    cur(b"SEK", DEFAULT_ROUNDING),
    cur(b"SGD", DEFAULT_ROUNDING),
    cur(b"SHP", DEFAULT_ROUNDING),
    cur(b"SIT", DEFAULT_ROUNDING),
    cur(b"SKK", DEFAULT_ROUNDING),
    cur(b"SLE", DEFAULT_ROUNDING),
    cur(b"SLL", ZERO_DECIMAL),
    cur(b"SOS", ZERO_DECIMAL),
    cur(b"SRD", DEFAULT_ROUNDING),
    cur(b"SRG", DEFAULT_ROUNDING),
    cur(b"SSP", DEFAULT_ROUNDING),
    cur(b"STD", ZERO_DECIMAL),
    cur(b"STN", DEFAULT_ROUNDING),
    cur(b"SUR", DEFAULT_ROUNDING),
    cur(b"SVC", DEFAULT_ROUNDING),
    cur(b"SYP", ZERO_DECIMAL),
    cur(b"SZL", DEFAULT_ROUNDING),
    cur(b"THB", DEFAULT_ROUNDING),
    cur(b"TJR", DEFAULT_ROUNDING),
    cur(b"TJS", DEFAULT_ROUNDING),
    cur(b"TMM", ZERO_DECIMAL),
    cur(b"TMT", DEFAULT_ROUNDING),
    cur(b"TND", THREE_DECIMAL),
    cur(b"TOP", DEFAULT_ROUNDING),
    cur(b"TPE", DEFAULT_ROUNDING),
    cur(b"TRL", ZERO_DECIMAL),
    cur(b"TRY", DEFAULT_ROUNDING),
    cur(b"TTD", DEFAULT_ROUNDING),
    cur(b"TWD", WHOLE_UNIT_CASH),
    cur(b"TZS", DEFAULT_ROUNDING),
    cur(b"UAH", DEFAULT_ROUNDING),
    cur(b"UAK", DEFAULT_ROUNDING),
    cur(b"UGS", DEFAULT_ROUNDING),
    cur(b"UGX", ZERO_DECIMAL),
    cur(b"USD", DEFAULT_ROUNDING),
    cur(b"USN", DEFAULT_ROUNDING),
    cur(b"USS", DEFAULT_ROUNDING),
    cur(b"UYI", ZERO_DECIMAL),
    cur(b"UYP", DEFAULT_ROUNDING),
    cur(b"UYU", DEFAULT_ROUNDING),
    cur(b"UZS", DEFAULT_ROUNDING),
    cur(b"VEB", DEFAULT_ROUNDING),
    cur(b"VEF", DEFAULT_ROUNDING),
    cur(b"VES", DEFAULT_ROUNDING),
    cur(b"VND", ZERO_DECIMAL),
    cur(b"VNN", DEFAULT_ROUNDING),
    cur(b"VUV", ZERO_DECIMAL),
    cur(b"WST", DEFAULT_ROUNDING),
    cur(b"XAF", ZERO_DECIMAL),
    cur(b"XAG", DEFAULT_ROUNDING),
    cur(b"XAU", DEFAULT_ROUNDING),
    cur(b"XBA", DEFAULT_ROUNDING),
    cur(b"XBB", DEFAULT_ROUNDING),
    cur(b"XBC", DEFAULT_ROUNDING),
    cur(b"XBD", DEFAULT_ROUNDING),
    cur(b"XCD", DEFAULT_ROUNDING),
    cur(b"XDR", DEFAULT_ROUNDING),
    cur(b"XEU", DEFAULT_ROUNDING),
    cur(b"XFO", DEFAULT_ROUNDING),
    cur(b"XFU", DEFAULT_ROUNDING),
    cur(b"XOF", ZERO_DECIMAL),
    cur(b"XPD", DEFAULT_ROUNDING),
    cur(b"XPF", ZERO_DECIMAL),
    cur(b"XPT", DEFAULT_ROUNDING),
    cur(b"XRE", DEFAULT_ROUNDING),
    cur(b"XSU", DEFAULT_ROUNDING),
    cur(b"XTS", DEFAULT_ROUNDING),
    cur(b"XUA", DEFAULT_ROUNDING),
    cur(b"XXX", DEFAULT_ROUNDING),
    cur(b"YDD", DEFAULT_ROUNDING),
    cur(b"YER", ZERO_DECIMAL),
    cur(b"YUD", DEFAULT_ROUNDING),
    cur(b"YUM", DEFAULT_ROUNDING),
    cur(b"YUN", DEFAULT_ROUNDING),
    cur(b"YUR", DEFAULT_ROUNDING),
    cur(b"ZAL", DEFAULT_ROUNDING),
    cur(b"ZAR", DEFAULT_ROUNDING),
    cur(b"ZMK", ZERO_DECIMAL),
    cur(b"ZMW", DEFAULT_ROUNDING),
    cur(b"ZRN", DEFAULT_ROUNDING),
    cur(b"ZRZ", DEFAULT_ROUNDING),
    cur(b"ZWD", ZERO_DECIMAL),
    cur(b"ZWL", DEFAULT_ROUNDING),
    cur(b"ZWR", WHOLE_UNIT_CASH),
];

pub(crate) static REGION_CURRENCIES: &[RegionRow] = &[
    reg("AC", b"SHP", 0, 0, true),
    reg("AD", b"EUR", 19990101, 0, true),
    reg("AE", b"AED", 0, 0, true),
    reg("AF", b"AFN", 0, 0, true),
    reg("AG", b"XCD", 0, 0, true),
    reg("AI", b"XCD", 0, 0, true),
    reg("AL", b"ALL", 0, 0, true),
    reg("AM", b"AMD", 0, 0, true),
    reg("AO", b"AOA", 0, 0, true),
    reg("AQ", b"XXX", 0, 0, false),
    reg("AR", b"ARS", 0, 0, true),
    reg("AS", b"USD", 0, 0, true),
    reg("AT", b"EUR", 19990101, 0, true),
    reg("AU", b"AUD", 0, 0, true),
    reg("AW", b"AWG", 0, 0, true),
    reg("AX", b"EUR", 19990101, 0, true),
    reg("AZ", b"AZN", 0, 0, true),
    reg("BA", b"BAM", 0, 0, true),
    reg("BB", b"BBD", 0, 0, true),
    reg("BD", b"BDT", 0, 0, true),
    reg("BE", b"EUR", 19990101, 0, true),
    reg("BF", b"XOF", 0, 0, true),
    reg("BG", b"BGN", 0, 0, true),
    reg("BH", b"BHD", 0, 0, true),
    reg("BI", b"BIF", 0, 0, true),
    reg("BJ", b"XOF", 0, 0, true),
    reg("BL", b"EUR", 19990101, 0, true),
    reg("BM", b"BMD", 0, 0, true),
    reg("BN", b"BND", 0, 0, true),
    reg("BO", b"BOB", 0, 0, true),
    reg("BQ", b"USD", 20110101, 0, true),
    reg("BR", b"BRL", 0, 0, true),
    reg("BS", b"BSD", 0, 0, true),
    reg("BT", b"BTN", 0, 0, true),
    reg("BT", b"INR", 0, 0, true),
    reg("BV", b"NOK", 0, 0, true),
    reg("BW", b"BWP", 0, 0, true),
    reg("BY", b"BYN", 20160701, 0, true),
    reg("BY", b"BYR", 20000101, 20170101, true),
    reg("BZ", b"BZD", 0, 0, true),
    reg("CA", b"CAD", 0, 0, true),
    reg("CC", b"AUD", 0, 0, true),
    reg("CD", b"CDF", 0, 0, true),
    reg("CF", b"XAF", 0, 0, true),
    reg("CG", b"XAF", 0, 0, true),
    reg("CH", b"CHF", 0, 0, true),
    reg("CI", b"XOF", 0, 0, true),
    reg("CK", b"NZD", 0, 0, true),
    reg("CL", b"CLP", 0, 0, true),
    reg("CM", b"XAF", 0, 0, true),
    reg("CN", b"CNY", 0, 0, true),
    reg("CO", b"COP", 0, 0, true),
    reg("CP", b"XXX", 0, 0, false),
    reg("CR", b"CRC", 0, 0, true),
    reg("CS", b"CSD", 20020701, 20060603, true),
    reg("CU", b"CUP", 0, 0, true),
    reg("CU", b"CUC", 19941101, 0, true),
    reg("CV", b"CVE", 0, 0, true),
    reg("CW", b"ANG", 20101010, 0, true),
    reg("CX", b"AUD", 0, 0, true),
    reg("CY", b"EUR", 20080101, 0, true),
    reg("CY", b"CYP", 0, 20080131, true),
    reg("CZ", b"CZK", 0, 0, true),
    reg("DE", b"EUR", 19990101, 0, true),
    reg("DG", b"USD", 0, 0, true),
    reg("DJ", b"DJF", 0, 0, true),
    reg("DK", b"DKK", 0, 0, true),
    reg("DM", b"XCD", 0, 0, true),
    reg("DO", b"DOP", 0, 0, true),
    reg("DZ", b"DZD", 0, 0, true),
    reg("EA", b"EUR", 19990101, 0, true),
    reg("EC", b"USD", 20000913, 0, true),
    reg("EE", b"EUR", 20110101, 0, true),
    reg("EE", b"EEK", 19920620, 20110115, true),
    reg("EG", b"EGP", 0, 0, true),
    reg("EH", b"MAD", 0, 0, true),
    reg("ER", b"ERN", 0, 0, true),
    reg("ES", b"EUR", 19990101, 0, true),
    reg("ET", b"ETB", 0, 0, true),
    reg("EU", b"EUR", 19990101, 0, true),
    reg("FI", b"EUR", 19990101, 0, true),
    reg("FJ", b"FJD", 0, 0, true),
    reg("FK", b"FKP", 0, 0, true),
    reg("FM", b"USD", 0, 0, true),
    reg("FO", b"DKK", 0, 0, true),
    reg("FR", b"EUR", 19990101, 0, true),
    reg("GA", b"XAF", 0, 0, true),
    reg("GB", b"GBP", 0, 0, true),
    reg("GD", b"XCD", 0, 0, true),
    reg("GE", b"GEL", 0, 0, true),
    reg("GF", b"EUR", 19990101, 0, true),
    reg("GG", b"GBP", 0, 0, true),
    reg("GH", b"GHS", 20070703, 0, true),
    reg("GI", b"GIP", 0, 0, true),
    reg("GL", b"DKK", 0, 0, true),
    reg("GM", b"GMD", 0, 0, true),
    reg("GN", b"GNF", 0, 0, true),
    reg("GP", b"EUR", 19990101, 0, true),
    reg("GQ", b"XAF", 0, 0, true),
    reg("GR", b"EUR", 20010101, 0, true),
    reg("GR", b"GRD", 0, 20020228, true),
    reg("GS", b"GBP", 0, 0, true),
    reg("GT", b"GTQ", 0, 0, true),
    reg("GU", b"USD", 0, 0, true),
    reg("GW", b"XOF", 19970331, 0, true),
    reg("GY", b"GYD", 0, 0, true),
    reg("HK", b"HKD", 0, 0, true),
    reg("HM", b"AUD", 0, 0, true),
    reg("HN", b"HNL", 0, 0, true),
    reg("HR", b"EUR", 20230101, 0, true),
    reg("HR", b"HRK", 19940530, 20230115, true),
    reg("HT", b"HTG", 0, 0, true),
    reg("HT", b"USD", 0, 0, true),
    reg("HU", b"HUF", 0, 0, true),
    reg("IC", b"EUR", 19990101, 0, true),
    reg("ID", b"IDR", 0, 0, true),
    reg("IE", b"EUR", 19990101, 0, true),
    reg("IL", b"ILS", 0, 0, true),
    reg("IM", b"GBP", 0, 0, true),
    reg("IN", b"INR", 0, 0, true),
    reg("IO", b"USD", 0, 0, true),
    reg("IQ", b"IQD", 0, 0, true),
    reg("IR", b"IRR", 0, 0, true),
    reg("IS", b"ISK", 0, 0, true),
    reg("IT", b"EUR", 19990101, 0, true),
    reg("JE", b"GBP", 0, 0, true),
    reg("JM", b"JMD", 0, 0, true),
    reg("JO", b"JOD", 0, 0, true),
    reg("JP", b"JPY", 0, 0, true),
    reg("KE", b"KES", 0, 0, true),
    reg("KG", b"KGS", 0, 0, true),
    reg("KH", b"KHR", 0, 0, true),
    reg("KI", b"AUD", 0, 0, true),
    reg("KM", b"KMF", 0, 0, true),
    reg("KN", b"XCD", 0, 0, true),
    reg("KP", b"KPW", 0, 0, true),
    reg("KR", b"KRW", 0, 0, true),
    reg("KW", b"KWD", 0, 0, true),
    reg("KY", b"KYD", 0, 0, true),
    reg("KZ", b"KZT", 0, 0, true),
    reg("LA", b"LAK", 0, 0, true),
    reg("LB", b"LBP", 0, 0, true),
    reg("LC", b"XCD", 0, 0, true),
    reg("LI", b"CHF", 0, 0, true),
    reg("LK", b"LKR", 0, 0, true),
    reg("LR", b"LRD", 0, 0, true),
    reg("LS", b"LSL", 0, 0, true),
    reg("LS", b"ZAR", 0, 0, true),
    reg("LT", b"EUR", 20150101, 0, true),
    reg("LT", b"LTL", 19930625, 20150115, true),
    reg("LU", b"EUR", 19990101, 0, true),
    reg("LV", b"EUR", 20140101, 0, true),
    reg("LV", b"LVL", 19930628, 20140115, true),
    reg("LY", b"LYD", 0, 0, true),
    reg("MA", b"MAD", 0, 0, true),
    reg("MC", b"EUR", 19990101, 0, true),
    reg("MD", b"MDL", 0, 0, true),
    reg("ME", b"EUR", 20020101, 0, true),
    reg("MF", b"EUR", 19990101, 0, true),
    reg("MG", b"MGA", 0, 0, true),
    reg("MH", b"USD", 0, 0, true),
    reg("MK", b"MKD", 0, 0, true),
    reg("ML", b"XOF", 19840601, 0, true),
    reg("MM", b"MMK", 0, 0, true),
    reg("MN", b"MNT", 0, 0, true),
    reg("MO", b"MOP", 0, 0, true),
    reg("MP", b"USD", 0, 0, true),
    reg("MQ", b"EUR", 19990101, 0, true),
    reg("MR", b"MRU", 20180101, 0, true),
    reg("MR", b"MRO", 19730629, 20180630, true),
    reg("MS", b"XCD", 0, 0, true),
    reg("MT", b"EUR", 20080101, 0, true),
    reg("MT", b"MTL", 19680601, 20080131, true),
    reg("MU", b"MUR", 0, 0, true),
    reg("MV", b"MVR", 0, 0, true),
    reg("MW", b"MWK", 0, 0, true),
    reg("MX", b"MXN", 0, 0, true),
    reg("MY", b"MYR", 0, 0, true),
    reg("MZ", b"MZN", 20060701, 0, true),
    reg("NA", b"NAD", 0, 0, true),
    reg("NA", b"ZAR", 0, 0, true),
    reg("NC", b"XPF", 0, 0, true),
    reg("NE", b"XOF", 0, 0, true),
    reg("NF", b"AUD", 0, 0, true),
    reg("NG", b"NGN", 0, 0, true),
    reg("NI", b"NIO", 0, 0, true),
    reg("NL", b"EUR", 19990101, 0, true),
    reg("NO", b"NOK", 0, 0, true),
    reg("NP", b"NPR", 0, 0, true),
    reg("NR", b"AUD", 0, 0, true),
    reg("NU", b"NZD", 0, 0, true),
    reg("NZ", b"NZD", 0, 0, true),
    reg("OM", b"OMR", 0, 0, true),
    reg("PA", b"PAB", 0, 0, true),
    reg("PA", b"USD", 0, 0, true),
    reg("PE", b"PEN", 0, 0, true),
    reg("PF", b"XPF", 0, 0, true),
    reg("PG", b"PGK", 0, 0, true),
    reg("PH", b"PHP", 0, 0, true),
    reg("PK", b"PKR", 0, 0, true),
    reg("PL", b"PLN", 0, 0, true),
    reg("PM", b"EUR", 19990101, 0, true),
    reg("PN", b"NZD", 0, 0, true),
    reg("PR", b"USD", 0, 0, true),
    reg("PS", b"ILS", 0, 0, true),
    reg("PS", b"JOD", 0, 0, true),
    reg("PT", b"EUR", 19990101, 0, true),
    reg("PW", b"USD", 0, 0, true),
    reg("PY", b"PYG", 0, 0, true),
    reg("QA", b"QAR", 0, 0, true),
    reg("RE", b"EUR", 19990101, 0, true),
    reg("RO", b"RON", 20050701, 0, true),
    reg("RS", b"RSD", 20061025, 0, true),
    reg("RU", b"RUB", 0, 0, true),
    reg("RW", b"RWF", 0, 0, true),
    reg("SA", b"SAR", 0, 0, true),
    reg("SB", b"SBD", 0, 0, true),
    reg("SC", b"SCR", 0, 0, true),
    reg("SD", b"SDG", 20070110, 0, true),
    reg("SE", b"SEK", 0, 0, true),
    reg("SG", b"SGD", 0, 0, true),
    reg("SH", b"SHP", 0, 0, true),
    reg("SI", b"EUR", 20070101, 0, true),
    reg("SI", b"SIT", 19911008, 20070115, true),
    reg("SJ", b"NOK", 0, 0, true),
    reg("SK", b"EUR", 20090101, 0, true),
    reg("SK", b"SKK", 19930208, 20090117, true),
    reg("SL", b"SLE", 20220401, 0, true),
    reg("SL", b"SLL", 19640804, 20231231, true),
    reg("SM", b"EUR", 19990101, 0, true),
    reg("SN", b"XOF", 0, 0, true),
    reg("SO", b"SOS", 0, 0, true),
    reg("SR", b"SRD", 20040101, 0, true),
    reg("SS", b"SSP", 20110718, 0, true),
    reg("ST", b"STN", 20180101, 0, true),
    reg("ST", b"STD", 19770908, 20180630, true),
    reg("SV", b"USD", 20010101, 0, true),
    reg("SX", b"ANG", 20101010, 0, true),
    reg("SY", b"SYP", 0, 0, true),
    reg("SZ", b"SZL", 0, 0, true),
    reg("TA", b"GBP", 0, 0, true),
    reg("TC", b"USD", 0, 0, true),
    reg("TD", b"XAF", 0, 0, true),
    reg("TF", b"EUR", 19990101, 0, true),
    reg("TG", b"XOF", 0, 0, true),
    reg("TH", b"THB", 0, 0, true),
    reg("TJ", b"TJS", 20001030, 0, true),
    reg("TK", b"NZD", 0, 0, true),
    reg("TL", b"USD", 0, 0, true),
    reg("TM", b"TMT", 20090101, 0, true),
    reg("TN", b"TND", 0, 0, true),
    reg("TO", b"TOP", 0, 0, true),
    reg("TR", b"TRY", 20050101, 0, true),
    reg("TT", b"TTD", 0, 0, true),
    reg("TV", b"AUD", 0, 0, true),
    reg("TW", b"TWD", 0, 0, true),
    reg("TZ", b"TZS", 0, 0, true),
    reg("UA", b"UAH", 19960902, 0, true),
    reg("UG", b"UGX", 0, 0, true),
    reg("UM", b"USD", 0, 0, true),
    reg("US", b"USD", 0, 0, true),
    reg("UY", b"UYU", 0, 0, true),
    reg("UZ", b"UZS", 0, 0, true),
    reg("VA", b"EUR", 19990101, 0, true),
    reg("VC", b"XCD", 0, 0, true),
    reg("VE", b"VES", 20180820, 0, true),
    reg("VE", b"VEF", 20080101, 20180820, true),
    reg("VG", b"USD", 0, 0, true),
    reg("VI", b"USD", 0, 0, true),
    reg("VN", b"VND", 0, 0, true),
    reg("VU", b"VUV", 0, 0, true),
    reg("WF", b"XPF", 0, 0, true),
    reg("WS", b"WST", 0, 0, true),
    reg("XK", b"EUR", 19990101, 0, true),
    reg("YE", b"YER", 0, 0, true),
    reg("YT", b"EUR", 19990101, 0, true),
    reg("ZA", b"ZAR", 0, 0, true),
    reg("ZM", b"ZMW", 20130101, 0, true),
    reg("ZM", b"ZMK", 19680116, 20130101, true),
    reg("ZW", b"USD", 20090403, 0, true),
];

pub(crate) static LANGUAGE_CURRENCIES: &[LanguageRow] = &[
    lang("af", b"ZAR"),
    lang("am", b"ETB"),
    lang("ar", b"EGP"),
    lang("az", b"AZN"),
    lang("be", b"BYN"),
    lang("bg", b"BGN"),
    lang("bn", b"BDT"),
    lang("cs", b"CZK"),
    lang("da", b"DKK"),
    lang("de", b"EUR"),
    lang("el", b"EUR"),
    lang("en", b"USD"),
    lang("es", b"EUR"),
    lang("et", b"EUR"),
    lang("fa", b"IRR"),
    lang("fi", b"EUR"),
    lang("fil", b"PHP"),
    lang("fr", b"EUR"),
    lang("ga", b"EUR"),
    lang("gu", b"INR"),
    lang("he", b"ILS"),
    lang("hi", b"INR"),
    lang("hr", b"EUR"),
    lang("hu", b"HUF"),
    lang("hy", b"AMD"),
    lang("id", b"IDR"),
    lang("is", b"ISK"),
    lang("it", b"EUR"),
    lang("ja", b"JPY"),
    lang("ka", b"GEL"),
    lang("kk", b"KZT"),
    lang("km", b"KHR"),
    lang("kn", b"INR"),
    lang("ko", b"KRW"),
    lang("lo", b"LAK"),
    lang("lt", b"EUR"),
    lang("lv", b"EUR"),
    lang("mk", b"MKD"),
    lang("ml", b"INR"),
    lang("mn", b"MNT"),
    lang("mr", b"INR"),
    lang("ms", b"MYR"),
    lang("my", b"MMK"),
    lang("nb", b"NOK"),
    lang("ne", b"NPR"),
    lang("nl", b"EUR"),
    lang("nn", b"NOK"),
    lang("no", b"NOK"),
    lang("pa", b"INR"),
    lang("pl", b"PLN"),
    lang("ps", b"AFN"),
    lang("pt", b"BRL"),
    lang("ro", b"RON"),
    lang("ru", b"RUB"),
    lang("si", b"LKR"),
    lang("sk", b"EUR"),
    lang("sl", b"EUR"),
    lang("sq", b"ALL"),
    lang("sr", b"RSD"),
    lang("sv", b"SEK"),
    lang("sw", b"TZS"),
    lang("ta", b"INR"),
    lang("te", b"INR"),
    lang("th", b"THB"),
    lang("tr", b"TRY"),
    lang("uk", b"UAH"),
    lang("ur", b"PKR"),
    lang("uz", b"UZS"),
    lang("vi", b"VND"),
    lang("zh", b"CNY"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn code_str(code: &[u8; 3]) -> &str {
        std::str::from_utf8(code).unwrap()
    }

    #[test]
    fn test_currency_table_strictly_ascending() {
        for window in CURRENCIES.windows(2) {
            assert!(
                window[0].code < window[1].code,
                "currency table unordered: {:?} >= {:?}",
                code_str(&window[0].code),
                code_str(&window[1].code)
            );
        }
    }

    #[test]
    fn test_currency_table_bounds() {
        assert_eq!(CURRENCIES.len(), NUM_CURRENCIES + 1);
        assert_eq!(&CURRENCIES[1].code, b"ADP");
        assert_eq!(&CURRENCIES[NUM_CURRENCIES].code, b"ZWR");
    }

    #[test]
    fn test_rounding_tags_in_range() {
        for row in &CURRENCIES[1..] {
            assert!(
                usize::from(row.rounding) < ROUNDING.len(),
                "{} has rounding tag {} out of range",
                code_str(&row.code),
                row.rounding
            );
        }
    }

    #[test]
    fn test_region_table_sorted() {
        for window in REGION_CURRENCIES.windows(2) {
            assert!(
                window[0].region <= window[1].region,
                "region table unordered at {}",
                window[1].region
            );
        }
    }

    #[test]
    fn test_region_currencies_are_table_members() {
        for row in REGION_CURRENCIES {
            if row.tender {
                assert!(
                    lookup_index(row.currency).is_some(),
                    "{} references unknown currency {}",
                    row.region,
                    code_str(&row.currency)
                );
            } else {
                // Explicit no-currency rows carry the sentinel.
                assert_eq!(&row.currency, b"XXX", "{}", row.region);
            }
        }
    }

    #[test]
    fn test_region_validity_windows_sane() {
        for row in REGION_CURRENCIES {
            if row.from != 0 && row.to != 0 {
                assert!(row.from < row.to, "{} window inverted", row.region);
            }
        }
    }

    #[test]
    fn test_language_table_sorted_unique() {
        for window in LANGUAGE_CURRENCIES.windows(2) {
            assert!(
                window[0].language < window[1].language,
                "language table unordered at {}",
                window[1].language
            );
        }
        for row in LANGUAGE_CURRENCIES {
            assert!(
                lookup_index(row.currency).is_some(),
                "{} references unknown currency {}",
                row.language,
                code_str(&row.currency)
            );
        }
    }

    #[test]
    fn test_region_row_slicing() {
        assert_eq!(region_rows("CU").len(), 2);
        assert_eq!(region_rows("NL").len(), 1);
        assert!(region_rows("ZZ").is_empty());
        assert!(region_rows("150").is_empty());
    }
}
