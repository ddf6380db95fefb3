// SPDX-License-Identifier: MPL-2.0
//! Bundles read from a directory on disk.
//!
//! The directory mirrors the embedded layout: `locales/<code>.json` and
//! `namespaces/<id>.json`. Useful for editing translations without
//! rebuilding.

use crate::application::port::{BundleSource, SourceError};
use crate::domain::{Bundle, Locale, Namespace};
use futures_util::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, file: &'static str) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        read_file(self.root.join(file)).boxed()
    }
}

async fn read_file(path: PathBuf) -> Result<Bundle, SourceError> {
    let bytes = tokio::fs::read(&path).await?;
    Ok(Bundle::from_json(&bytes)?)
}

impl BundleSource for DirectorySource {
    fn fetch_locale(&self, locale: Locale) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        self.read(locale.bundle_file())
    }

    fn fetch_namespace(
        &self,
        namespace: Namespace,
    ) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        self.read(namespace.bundle_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_locale_from_locales_subdirectory() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("locales")).expect("mkdir");
        fs::write(
            dir.path().join("locales/nl.json"),
            r#"{"nav":{"home":"Start"}}"#,
        )
        .expect("write nl.json");

        let bundle = DirectorySource::new(dir.path())
            .fetch_locale(Locale::Nl)
            .await
            .expect("nl bundle");
        assert_eq!(bundle.get("nav.home"), Some("Start"));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = DirectorySource::new(dir.path())
            .fetch_namespace(Namespace::Tech)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("namespaces")).expect("mkdir");
        fs::write(dir.path().join("namespaces/seo.json"), "not json").expect("write");

        let err = DirectorySource::new(dir.path())
            .fetch_namespace(Namespace::Seo)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }
}
