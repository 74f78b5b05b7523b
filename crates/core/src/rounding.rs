//! Monetary rounding rules per currency and transaction kind.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::code::Currency;
use crate::data;

/// The kind of transaction a rounding rule applies to.
///
/// Cash rounding is sometimes coarser than standard accounting rounding:
/// Swiss Franc cash rounds to 5-centime increments, and several
/// currencies drop their decimals entirely for cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Standard accounting rounding.
    Standard,
    /// Rounding for physical cash transactions.
    Cash,
}

impl Kind {
    /// Returns `(scale, increment)` for amounts in `currency`: the number
    /// of decimal digits and the minimal increment at that scale.
    ///
    /// Currencies without an exception entry get the common `(2, 1)`
    /// behavior; the policy never fails, it degrades to the default.
    #[must_use]
    pub fn rounding(self, currency: Currency) -> (u32, u32) {
        let tag = data::currency_row(currency.bytes())
            .map_or(data::DEFAULT_ROUNDING, |row| row.rounding);
        let pair = &data::ROUNDING[usize::from(tag)];
        let rule = match self {
            Self::Standard => pair.standard,
            Self::Cash => pair.cash,
        };
        (rule.scale, rule.increment)
    }

    /// The minimal rounding increment as a decimal amount, e.g. `0.05`
    /// for Swiss Franc cash and `1` for Japanese Yen.
    #[must_use]
    pub fn increment(self, currency: Currency) -> Decimal {
        let (scale, increment) = self.rounding(currency);
        Decimal::new(i64::from(increment), scale)
    }
}
