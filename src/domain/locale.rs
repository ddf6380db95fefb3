// SPDX-License-Identifier: MPL-2.0
//! Supported locales and content namespaces.
//!
//! Both sets are closed enumerations. Anything that maps an identifier to a
//! resource (bundle file, display name, Open Graph tag) does so with an
//! exhaustive `match`, so adding a variant is a compile error until every
//! mapping covers it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

// =============================================================================
// Locale
// =============================================================================

/// A locale the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default and fallback locale.
    En,
    /// French.
    Fr,
    /// Dutch.
    Nl,
    /// German.
    De,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Fr, Locale::Nl, Locale::De];

    /// The locale bundled with the binary and used as the lookup fallback.
    pub const DEFAULT: Locale = Locale::En;

    /// Parses a URL segment or language code (`"fr"`).
    ///
    /// Only the exact lowercase code is accepted; route segments are
    /// case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "nl" => Some(Locale::Nl),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Maps a full language tag (`"fr-BE"`, `"de_DE.UTF-8"`) onto a supported
    /// locale by its language subtag.
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let tag = tag.split('.').next().unwrap_or(tag).replace('_', "-");
        let langid: LanguageIdentifier = tag.parse().ok()?;
        Self::from_code(&langid.language.as_str().to_ascii_lowercase())
    }

    /// Short code used in URLs and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Nl => "nl",
            Locale::De => "de",
        }
    }

    /// Name of the language in that language, as shown by the switcher.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Nl => "Nederlands",
            Locale::De => "Deutsch",
        }
    }

    /// Value for the `og:locale` meta tag.
    #[must_use]
    pub const fn og_locale(self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Fr => "fr_FR",
            Locale::Nl => "nl_NL",
            Locale::De => "de_DE",
        }
    }

    /// Path of this locale's bundle relative to a bundle root.
    #[must_use]
    pub const fn bundle_file(self) -> &'static str {
        match self {
            Locale::En => "locales/en.json",
            Locale::Fr => "locales/fr.json",
            Locale::Nl => "locales/nl.json",
            Locale::De => "locales/de.json",
        }
    }

    /// Root path of the localized site (`/fr`).
    #[must_use]
    pub fn root_path(self) -> String {
        format!("/{}", self.as_str())
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Locale::En)
    }

    /// Language identifier handed to Fluent for locale-aware formatting.
    #[must_use]
    pub fn language_id(self) -> LanguageIdentifier {
        self.as_str().parse().unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale `{0}`")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

/// Pure membership test against the supported locale set.
#[must_use]
pub fn is_supported_locale(code: &str) -> bool {
    Locale::from_code(code).is_some()
}

// =============================================================================
// Namespace
// =============================================================================

/// An optional slice of English content loaded on demand.
///
/// Translated bundles already carry these keys; only the English bundle is
/// shipped without them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// Service descriptions and detail pages.
    Services,
    /// Technology detail pages.
    Tech,
    /// Industry detail pages.
    Industries,
    /// City and country landing pages.
    Cities,
    /// Page titles and meta descriptions.
    Seo,
}

impl Namespace {
    pub const ALL: [Namespace; 5] = [
        Namespace::Services,
        Namespace::Tech,
        Namespace::Industries,
        Namespace::Cities,
        Namespace::Seo,
    ];

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "services" => Some(Namespace::Services),
            "tech" => Some(Namespace::Tech),
            "industries" => Some(Namespace::Industries),
            "cities" => Some(Namespace::Cities),
            "seo" => Some(Namespace::Seo),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Namespace::Services => "services",
            Namespace::Tech => "tech",
            Namespace::Industries => "industries",
            Namespace::Cities => "cities",
            Namespace::Seo => "seo",
        }
    }

    /// Path of this namespace's bundle relative to a bundle root.
    #[must_use]
    pub const fn bundle_file(self) -> &'static str {
        match self {
            Namespace::Services => "namespaces/services.json",
            Namespace::Tech => "namespaces/tech.json",
            Namespace::Industries => "namespaces/industries.json",
            Namespace::Cities => "namespaces/cities.json",
            Namespace::Seo => "namespaces/seo.json",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("unknown namespace `{s}`"))
    }
}
