//! Minimal BCP 47 language-tag parsing.
//!
//! Only the pieces the currency resolvers need are modeled: the base
//! language, an optional script, an optional region, and the value of the
//! `cu` key inside a Unicode (`-u-`) extension. Variant subtags and other
//! extension keys are skipped, not errors.

use crate::error::LocaleError;
use crate::region::Region;

/// The undetermined-language subtag.
const UND: &str = "und";

/// A parsed language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    language: String,
    script: Option<String>,
    region: Option<Region>,
    currency_override: Option<String>,
}

impl LanguageTag {
    /// Parses a language tag such as `"nl-BE"`, `"en-u-cu-eur"`, or `"und"`.
    ///
    /// Subtags may be separated by `-` or `_` and are matched
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the tag is empty or does not start with a
    /// 2-3 letter language subtag.
    pub fn parse(text: &str) -> Result<Self, LocaleError> {
        if text.is_empty() {
            return Err(LocaleError::EmptyTag);
        }
        let mut subtags = text.split(['-', '_']);

        let language = match subtags.next() {
            Some(first) if (2..=3).contains(&first.len()) && is_ascii_alpha(first) => {
                first.to_ascii_lowercase()
            }
            _ => return Err(LocaleError::MalformedLanguage(text.to_string())),
        };

        let mut tag = Self {
            language,
            script: None,
            region: None,
            currency_override: None,
        };

        let mut in_extensions = false;
        let mut in_unicode_extension = false;
        let mut pending_currency_key = false;
        for subtag in subtags {
            if subtag.len() == 1 {
                // Singleton: everything from here on is extension data.
                in_extensions = true;
                in_unicode_extension = subtag.eq_ignore_ascii_case("u");
                pending_currency_key = false;
                continue;
            }
            if in_extensions {
                if !in_unicode_extension {
                    continue;
                }
                if pending_currency_key {
                    tag.currency_override = Some(subtag.to_ascii_lowercase());
                    pending_currency_key = false;
                } else if subtag.eq_ignore_ascii_case("cu") {
                    pending_currency_key = true;
                }
                continue;
            }
            if tag.script.is_none()
                && tag.region.is_none()
                && subtag.len() == 4
                && is_ascii_alpha(subtag)
            {
                tag.script = Some(titlecase(subtag));
            } else if tag.region.is_none() {
                if let Ok(region) = Region::parse(subtag) {
                    tag.region = Some(region);
                }
                // Otherwise a variant or garbage subtag; skip it.
            }
        }

        Ok(tag)
    }

    /// The base language subtag, lowercase (e.g. `"nl"`, `"und"`).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The script subtag, title case, if present.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// The region subtag, if present.
    #[must_use]
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// The raw value of the `u-cu-` currency extension, if present.
    ///
    /// The value is not validated here; currency validation belongs to the
    /// ISO 4217 parser consuming it.
    #[must_use]
    pub fn currency_override(&self) -> Option<&str> {
        self.currency_override.as_deref()
    }

    /// Returns true for the undetermined-language tag (`und`).
    #[must_use]
    pub fn is_undetermined(&self) -> bool {
        self.language == UND
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = self.region {
            write!(f, "-{region}")?;
        }
        if let Some(currency) = &self.currency_override {
            write!(f, "-u-cu-{currency}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for LanguageTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ascii_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn titlecase(s: &str) -> String {
    let mut out = s.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}
