// SPDX-License-Identifier: MPL-2.0
//! Canonical and alternate-language links for a page's `<head>`.
//!
//! Every page exists once per locale, so each page advertises its siblings
//! with `hreflang` links plus an `x-default` pointing at English. Content
//! published in English only passes `locales: Some(&[Locale::En])`.

use crate::domain::Locale;
use serde::Serialize;

/// One `<link rel="alternate" hreflang=... href=...>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// Link and Open Graph locale values for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    /// `<html lang>`.
    pub lang: Locale,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub og_locale: &'static str,
    pub og_locale_alternates: Vec<&'static str>,
}

/// Inputs for [`PageLinks::build`].
#[derive(Debug, Clone, Copy)]
pub struct PageLinkOptions<'a> {
    /// Site origin without trailing slash.
    pub base_url: &'a str,
    /// Locale of the current URL.
    pub locale: Locale,
    /// Path after the locale segment (`"/services"`, or `""` for the home page).
    pub path: &'a str,
    /// Locales the page is published in; all of them when `None`.
    pub locales: Option<&'a [Locale]>,
    /// Forces the canonical URL onto one locale (English-only articles).
    pub canonical_locale: Option<Locale>,
}

impl PageLinks {
    #[must_use]
    pub fn build(options: PageLinkOptions<'_>) -> Self {
        let PageLinkOptions {
            base_url,
            locale,
            path,
            locales,
            canonical_locale,
        } = options;
        let base_url = base_url.trim_end_matches('/');
        let published = locales.unwrap_or(&Locale::ALL[..]);
        let url = |l: Locale| format!("{base_url}/{l}{path}");

        let mut alternates: Vec<AlternateLink> = published
            .iter()
            .map(|&l| AlternateLink {
                hreflang: l.as_str().to_string(),
                href: url(l),
            })
            .collect();
        alternates.push(AlternateLink {
            hreflang: "x-default".to_string(),
            href: url(Locale::DEFAULT),
        });

        Self {
            lang: locale,
            canonical: url(canonical_locale.unwrap_or(locale)),
            alternates,
            og_locale: locale.og_locale(),
            og_locale_alternates: published
                .iter()
                .filter(|&&l| l != locale)
                .map(|l| l.og_locale())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(locale: Locale, path: &str) -> PageLinkOptions<'_> {
        PageLinkOptions {
            base_url: "https://dmckreatif.com",
            locale,
            path,
            locales: None,
            canonical_locale: None,
        }
    }

    #[test]
    fn alternates_cover_every_locale_plus_x_default() {
        let links = PageLinks::build(options(Locale::Fr, "/services"));

        assert_eq!(links.canonical, "https://dmckreatif.com/fr/services");
        let hreflangs: Vec<_> = links.alternates.iter().map(|a| a.hreflang.as_str()).collect();
        assert_eq!(hreflangs, ["en", "fr", "nl", "de", "x-default"]);
        assert_eq!(
            links.alternates.last().map(|a| a.href.as_str()),
            Some("https://dmckreatif.com/en/services")
        );
    }

    #[test]
    fn og_locale_alternates_exclude_current() {
        let links = PageLinks::build(options(Locale::De, ""));
        assert_eq!(links.og_locale, "de_DE");
        assert_eq!(links.og_locale_alternates, vec!["en_US", "fr_FR", "nl_NL"]);
        assert_eq!(links.canonical, "https://dmckreatif.com/de");
    }

    #[test]
    fn english_only_content_pins_canonical() {
        let links = PageLinks::build(PageLinkOptions {
            locales: Some(&[Locale::En][..]),
            canonical_locale: Some(Locale::En),
            ..options(Locale::Nl, "/blog/gdpr-checklist")
        });

        assert_eq!(links.canonical, "https://dmckreatif.com/en/blog/gdpr-checklist");
        assert_eq!(links.alternates.len(), 2);
        assert_eq!(links.og_locale_alternates, vec!["en_US"]);
    }
}
