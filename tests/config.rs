// SPDX-License-Identifier: MPL-2.0
use site_locale::config::{self, Config, DEFAULT_BASE_URL};
use site_locale::{i18n, Locale, Namespace};
use tempfile::tempdir;

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.general.language = Some("nl".to_string());
    config.bundles.url = Some("https://cdn.example.com/i18n".to_string());
    config.bundles.preload_namespaces = vec!["seo".to_string(), "cities".to_string()];
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
    assert_eq!(loaded.seo.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        loaded.preload_namespaces(),
        vec![Namespace::Seo, Namespace::Cities]
    );
    assert_eq!(i18n::resolve_preferred_locale(None, &loaded), Locale::Nl);
    assert_eq!(i18n::resolve_preferred_locale(Some("de"), &loaded), Locale::De);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn broken_settings_file_yields_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join(config::CONFIG_FILE), "[general\nlanguage = ").unwrap();

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
