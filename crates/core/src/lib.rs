//! Currency identity for Tender.
//!
//! This crate contains pure lookup logic over immutable reference tables,
//! with ZERO web or database dependencies:
//!
//! - `code` - ISO 4217 currency codes: parsing, validation, rendering
//! - `region` - current currency of a geographic region
//! - `tag` - likely currency of a language tag, with a confidence level
//! - `rounding` - decimal scale and cash/standard rounding increments
//! - `config` - deployment default currency
//!
//! All tables are compile-time constants; every operation is a
//! synchronous, non-blocking lookup that is safe to call concurrently
//! from any number of threads.

mod data;

pub mod code;
pub mod config;
pub mod error;
pub mod region;
pub mod rounding;
pub mod tag;

#[cfg(test)]
mod code_props;

pub use code::{must_parse_iso, parse_iso, Currency};
pub use code::{
    AUD, BRL, CAD, CHF, CNY, DKK, EUR, GBP, HKD, IDR, INR, JPY, KRW, MXN, NOK, NZD, SEK, SGD,
    TWD, USD, XTS, XXX,
};
pub use config::ResolverConfig;
pub use error::ParseIsoError;
pub use region::from_region;
pub use rounding::Kind;
pub use tag::{from_tag, from_tag_with_default, Confidence};
