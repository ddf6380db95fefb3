// SPDX-License-Identifier: MPL-2.0
//! Bundle source port definition.
//!
//! This module defines the [`BundleSource`] trait through which the locale
//! store fetches locale bundles and namespace slices it does not hold yet.
//!
//! # Design Notes
//!
//! - A locale fetch returns the complete bundle in one response
//! - Namespace fetches return a partial tree merged into the default locale
//! - Returned futures are `'static` so the store can share them between callers

use crate::domain::{Bundle, Locale, Namespace};
use futures_util::future::BoxFuture;

// =============================================================================
// SourceError
// =============================================================================

/// Errors that can occur while fetching a bundle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source has no bundle for the requested id.
    #[error("bundle not found: {0}")]
    NotFound(String),

    /// Reading the bundle failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The bundle was read but is not a JSON object.
    #[error("malformed bundle: {0}")]
    Malformed(String),

    /// A network request failed or returned an error status.
    #[error("request failed: {0}")]
    Request(String),

    /// The task driving the fetch ended before producing a result.
    #[error("load interrupted: {0}")]
    Interrupted(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Malformed(err.to_string())
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(err.to_string())
        } else {
            SourceError::Io(err.to_string())
        }
    }
}

// =============================================================================
// BundleSource
// =============================================================================

/// Fetches translation bundles on behalf of the locale store.
///
/// Implementations must not cache on their own: the store guarantees at most
/// one call per id while a previous call is pending, and never calls again
/// after a success.
pub trait BundleSource: Send + Sync {
    /// Fetches the complete bundle for `locale`.
    fn fetch_locale(&self, locale: Locale) -> BoxFuture<'static, Result<Bundle, SourceError>>;

    /// Fetches the English slice for `namespace`.
    fn fetch_namespace(
        &self,
        namespace: Namespace,
    ) -> BoxFuture<'static, Result<Bundle, SourceError>>;
}
