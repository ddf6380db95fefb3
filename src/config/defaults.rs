// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Paths**: Config file name and directory overrides
//! - **SEO**: Public site URL used for canonical and alternate links
//! - **Events**: Locale switch channel sizing

// ==========================================================================
// Path Defaults
// ==========================================================================

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "SiteLocale";

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SITE_LOCALE_CONFIG_DIR";

// ==========================================================================
// SEO Defaults
// ==========================================================================

/// Public origin of the site, without trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://dmckreatif.com";

/// Site name advertised in Open Graph tags.
pub const SITE_NAME: &str = "DMC Kreatif";

// ==========================================================================
// Event Defaults
// ==========================================================================

/// Locale switch events buffered per subscriber before the oldest are dropped.
pub const DEFAULT_EVENT_CAPACITY: usize = 32;
