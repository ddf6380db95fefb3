// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module loads translation bundles on demand and gates rendering on
//! them. The English bundle is compiled in; French, Dutch and German are
//! fetched the first time a route asks for them, and optional English content
//! namespaces are merged when a page needs them.
//!
//! # Features
//!
//! - Locale store with deduplicated, retryable loads ([`store`])
//! - Route gate with last-request-wins activation ([`router`])
//! - Per-page namespace loading with a ready flag ([`namespace`])
//! - `{{name}}` interpolation through Fluent ([`format`])
//! - Locale switch events for analytics ([`events`])
//! - Localized paths and translation coverage ([`paths`], [`coverage`])

pub mod coverage;
pub mod events;
pub mod format;
pub mod namespace;
pub mod paths;
pub mod router;
pub mod store;

pub use coverage::CoverageReport;
pub use events::{LocaleEvents, LocaleSwitch};
pub use namespace::NamespaceGate;
pub use router::{Activation, LocaleRouter};
pub use store::{LoadState, LocaleStore};

use crate::config::Config;
use crate::domain::Locale;
use crate::error::{Error, Result};
use crate::infrastructure;

/// Builds the session's store from configuration.
///
/// The default locale always comes from the embedded bundle; the configured
/// source only serves the other locales and the namespaces.
pub fn init(config: &Config) -> Result<LocaleStore> {
    let default_bundle = infrastructure::default_bundle().map_err(|source| Error::LocaleLoad {
        locale: Locale::DEFAULT,
        source,
    })?;
    let source = infrastructure::source_from_config(config);
    tracing::debug!(keys = default_bundle.len(), "default bundle loaded");
    Ok(LocaleStore::new(source, default_bundle))
}

/// Picks the locale a visitor most likely wants: CLI flag, then config, then
/// the OS locale, then the default.
#[must_use]
pub fn resolve_preferred_locale(cli_lang: Option<&str>, config: &Config) -> Locale {
    resolve_locale(cli_lang, config, sys_locale::get_locale().as_deref())
        .unwrap_or(Locale::DEFAULT)
}

fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    os_locale: Option<&str>,
) -> Option<Locale> {
    // 1. Check CLI args
    if let Some(locale) = cli_lang.and_then(Locale::from_language_tag) {
        return Some(locale);
    }

    // 2. Check config file
    if let Some(locale) = config
        .general
        .language
        .as_deref()
        .and_then(Locale::from_language_tag)
    {
        return Some(locale);
    }

    // 3. Check OS locale
    os_locale.and_then(Locale::from_language_tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr"), &config, Some("de-DE"));
        assert_eq!(lang, Some(Locale::Fr));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("nl-BE".to_string());
        let lang = resolve_locale(None, &config, Some("de-DE"));
        assert_eq!(lang, Some(Locale::Nl));
    }

    #[test]
    fn test_resolve_locale_unsupported_cli_falls_through() {
        let mut config = Config::default();
        config.general.language = Some("de".to_string());
        let lang = resolve_locale(Some("es"), &config, None);
        assert_eq!(lang, Some(Locale::De));
    }

    #[test]
    fn test_resolve_locale_os() {
        let config = Config::default();
        assert_eq!(resolve_locale(None, &config, Some("fr_FR.UTF-8")), Some(Locale::Fr));
        assert_eq!(resolve_locale(None, &config, Some("ja-JP")), None);
    }

    #[test]
    fn init_starts_with_embedded_english() {
        let store = init(&Config::default()).expect("embedded store");
        assert_eq!(store.active_locale(), Locale::En);
        assert_eq!(store.t("nav.home"), "Home");
    }
}
