// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the locale store remains
//! independent of where bundles actually come from.
//!
//! # Available Ports
//!
//! - [`source`]: Locale and namespace bundle fetching
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `reqwest` or file-system types)
//! - Traits are `Send + Sync` so one source can back a shared store
//! - Methods return boxed futures instead of `async fn` so they stay object safe
//!
//! # Example
//!
//! ```ignore
//! use site_locale::application::port::BundleSource;
//! use site_locale::domain::Locale;
//!
//! async fn warm(source: &dyn BundleSource) {
//!     let _ = source.fetch_locale(Locale::Fr).await;
//! }
//! ```

pub mod source;

pub use source::{BundleSource, SourceError};
