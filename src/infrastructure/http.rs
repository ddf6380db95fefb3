// SPDX-License-Identifier: MPL-2.0
//! Bundles fetched over HTTP from the site's static asset host.
//!
//! Files are requested at `<base_url>/<bundle_file>`, so a CDN serving the
//! `assets/i18n/` tree as-is works without extra configuration.

use crate::application::port::{BundleSource, SourceError};
use crate::domain::{Bundle, Locale, Namespace};
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Absolute URL of a bundle file.
    #[must_use]
    pub fn url_for(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file)
    }

    fn get(&self, file: &'static str) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        fetch(self.client.clone(), self.url_for(file)).boxed()
    }
}

async fn fetch(client: reqwest::Client, url: String) -> Result<Bundle, SourceError> {
    tracing::debug!(%url, "requesting bundle");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| SourceError::Request(err.to_string()))?;

    match response.status() {
        StatusCode::NOT_FOUND => return Err(SourceError::NotFound(url)),
        status if !status.is_success() => {
            return Err(SourceError::Request(format!("{url}: HTTP {status}")));
        }
        _ => {}
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| SourceError::Request(err.to_string()))?;
    Ok(Bundle::from_json(&body)?)
}

impl BundleSource for HttpSource {
    fn fetch_locale(&self, locale: Locale) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        self.get(locale.bundle_file())
    }

    fn fetch_namespace(
        &self,
        namespace: Namespace,
    ) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        self.get(namespace.bundle_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_without_double_slash() {
        let source = HttpSource::new("https://cdn.example.com/i18n/");
        assert_eq!(
            source.url_for(Locale::De.bundle_file()),
            "https://cdn.example.com/i18n/locales/de.json"
        );
        assert_eq!(
            source.url_for(Namespace::Cities.bundle_file()),
            "https://cdn.example.com/i18n/namespaces/cities.json"
        );
    }
}
