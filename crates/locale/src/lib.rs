//! Region identifiers and language-tag parsing for Tender.
//!
//! This crate provides the locale primitives consumed by the currency
//! resolvers in `tender-core`:
//! - [`Region`] - a validated ISO 3166-1 alpha-2 or UN M.49 numeric-3 region
//! - [`LanguageTag`] - a minimal BCP 47 subset exposing the base language,
//!   an optional region, and an optional `u-cu-...` currency override
//! - [`LocaleError`] - parse errors for malformed input
//!
//! Parsing is case-insensitive and renders canonical case (lowercase
//! language, title-case script, uppercase region).

pub mod error;
pub mod region;
pub mod tag;

#[cfg(test)]
mod tag_tests;

pub use error::LocaleError;
pub use region::Region;
pub use tag::LanguageTag;
