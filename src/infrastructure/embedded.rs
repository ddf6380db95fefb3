// SPDX-License-Identifier: MPL-2.0
//! Bundles compiled into the binary.
//!
//! Every locale and namespace JSON file under `assets/i18n/` is embedded with
//! `rust-embed`. The English bundle is read synchronously at startup; the
//! others are parsed only when the store asks for them.

use crate::application::port::{BundleSource, SourceError};
use crate::domain::{Bundle, Locale, Namespace};
use futures_util::future::{self, BoxFuture, FutureExt};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

fn read_bundle(file: &str) -> Result<Bundle, SourceError> {
    let content = Asset::get(file).ok_or_else(|| SourceError::NotFound(file.to_string()))?;
    Ok(Bundle::from_json(content.data.as_ref())?)
}

/// The bundled default-locale translations the store starts with.
pub fn default_bundle() -> Result<Bundle, SourceError> {
    read_bundle(Locale::DEFAULT.bundle_file())
}

/// [`BundleSource`] backed by the embedded asset folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reads a locale bundle without going through the store; used for
    /// offline coverage reports.
    pub fn read_locale(&self, locale: Locale) -> Result<Bundle, SourceError> {
        read_bundle(locale.bundle_file())
    }

    pub fn read_namespace(&self, namespace: Namespace) -> Result<Bundle, SourceError> {
        read_bundle(namespace.bundle_file())
    }
}

impl BundleSource for EmbeddedSource {
    fn fetch_locale(&self, locale: Locale) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        future::lazy(move |_| read_bundle(locale.bundle_file())).boxed()
    }

    fn fetch_namespace(
        &self,
        namespace: Namespace,
    ) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        future::lazy(move |_| read_bundle(namespace.bundle_file())).boxed()
    }
}
