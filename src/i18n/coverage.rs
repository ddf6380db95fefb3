// SPDX-License-Identifier: MPL-2.0
//! Key coverage of a translated bundle against the English reference.

use crate::domain::{Bundle, Locale};
use serde::Serialize;
use std::collections::BTreeSet;

/// Differences between a translated bundle and the reference bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub locale: Locale,
    /// Reference keys with no translation (lookups fall back to English).
    pub missing: Vec<String>,
    /// Translated keys the reference does not have.
    pub extra: Vec<String>,
    /// Translated keys whose value is blank.
    pub empty: Vec<String>,
}

impl CoverageReport {
    #[must_use]
    pub fn compare(locale: Locale, reference: &Bundle, translated: &Bundle) -> Self {
        let reference_keys: BTreeSet<String> = reference.keys().into_iter().collect();
        let translated_keys: BTreeSet<String> = translated.keys().into_iter().collect();

        let missing = reference_keys.difference(&translated_keys).cloned().collect();
        let extra = translated_keys.difference(&reference_keys).cloned().collect();
        let empty = translated_keys
            .iter()
            .filter(|key| translated.get(key).is_some_and(|v| v.trim().is_empty()))
            .cloned()
            .collect();

        Self {
            locale,
            missing,
            extra,
            empty,
        }
    }

    /// Every reference key has a non-blank translation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.empty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_extra_and_empty_keys() {
        let mut en = Bundle::new();
        en.insert("nav.home", "Home");
        en.insert("nav.blog", "Blog");
        en.insert("hero.title", "Websites");

        let mut fr = Bundle::new();
        fr.insert("nav.home", "Accueil");
        fr.insert("nav.blog", " ");
        fr.insert("nav.legacy", "Ancien");

        let report = CoverageReport::compare(Locale::Fr, &en, &fr);
        assert_eq!(report.missing, vec!["hero.title".to_string()]);
        assert_eq!(report.extra, vec!["nav.legacy".to_string()]);
        assert_eq!(report.empty, vec!["nav.blog".to_string()]);
        assert!(!report.is_complete());
    }

    #[test]
    fn identical_key_sets_are_complete() {
        let mut en = Bundle::new();
        en.insert("a", "A");
        let mut de = Bundle::new();
        de.insert("a", "Ä");
        assert!(CoverageReport::compare(Locale::De, &en, &de).is_complete());
    }
}
