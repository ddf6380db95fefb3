// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types shared by every other layer.
//!
//! This module contains the closed locale and namespace enumerations and the
//! translation bundle type. It performs no I/O and holds no shared state.
//!
//! # Modules
//!
//! - [`locale`]: Supported locales and content namespaces ([`Locale`](locale::Locale),
//!   [`Namespace`](locale::Namespace))
//! - [`bundle`]: Dot-path translation tree ([`Bundle`](bundle::Bundle))

pub mod bundle;
pub mod locale;

pub use bundle::Bundle;
pub use locale::{is_supported_locale, Locale, Namespace, UnsupportedLocale};
