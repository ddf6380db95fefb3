// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing application ports.
//!
//! # Adapters
//!
//! - [`embedded`]: Bundles compiled into the binary (`rust-embed`)
//! - [`directory`]: Bundles read from disk (`tokio::fs`)
//! - [`http`]: Bundles fetched from an asset host (`reqwest`)

pub mod directory;
pub mod embedded;
pub mod http;

pub use directory::DirectorySource;
pub use embedded::{default_bundle, EmbeddedSource};
pub use http::HttpSource;

use crate::application::port::BundleSource;
use crate::config::Config;
use std::sync::Arc;

/// Picks the bundle source a configuration asks for.
///
/// A bundle URL wins over a bundle directory; with neither set the embedded
/// bundles are used.
pub fn source_from_config(config: &Config) -> Arc<dyn BundleSource> {
    if let Some(url) = &config.bundles.url {
        tracing::info!(%url, "fetching bundles over HTTP");
        return Arc::new(HttpSource::new(url.clone()));
    }
    if let Some(dir) = &config.bundles.dir {
        tracing::info!(dir = %dir.display(), "reading bundles from directory");
        return Arc::new(DirectorySource::new(dir.clone()));
    }
    Arc::new(EmbeddedSource::new())
}
