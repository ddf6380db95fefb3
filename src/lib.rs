// SPDX-License-Identifier: MPL-2.0
//! `site_locale` loads and gates the translations of a localized agency website.
//!
//! It provides an on-demand locale store with deduplicated fetches, a route
//! gate that only lets pages render once their locale is active, lazily
//! merged English content namespaces, and the SEO link helpers built on the
//! same locale set.

#![doc(html_root_url = "https://docs.rs/site_locale/0.3.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod seo;

pub use domain::{is_supported_locale, Bundle, Locale, Namespace};
pub use error::{Error, Result};
pub use i18n::{Activation, LocaleRouter, LocaleStore, NamespaceGate};
