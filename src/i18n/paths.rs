// SPDX-License-Identifier: MPL-2.0
//! Localized route paths of the form `/{locale}/...`.

use crate::domain::{Locale, Namespace};

/// First path segment, ignoring any query string or fragment.
#[must_use]
pub fn locale_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Splits `/fr/services/seo` into `(Fr, "/services/seo")`.
///
/// Returns `None` if the first segment is not a supported locale.
#[must_use]
pub fn split_locale(path: &str) -> Option<(Locale, &str)> {
    let segment = locale_segment(path)?;
    let locale = Locale::from_code(segment)?;
    let trimmed = path.trim_start_matches('/');
    Some((locale, &trimmed[segment.len()..]))
}

/// Builds `/{locale}{rest}`, inserting a slash when `rest` lacks one.
#[must_use]
pub fn localized_path(locale: Locale, rest: &str) -> String {
    match rest {
        "" | "/" => locale.root_path(),
        _ if rest.starts_with('/') => format!("/{}{}", locale, rest),
        _ => format!("/{}/{}", locale, rest),
    }
}

/// The same page in another locale, as the language switcher links it.
///
/// A path without a supported locale segment maps to the target's root.
#[must_use]
pub fn switch_locale_path(path: &str, to: Locale) -> String {
    match split_locale(path) {
        Some((_, rest)) => localized_path(to, rest),
        None => to.root_path(),
    }
}

/// Namespaces a page needs before it renders, keyed by the path after the
/// locale segment.
#[must_use]
pub fn route_namespaces(rest: &str) -> &'static [Namespace] {
    let rest = rest.split(['?', '#']).next().unwrap_or(rest);
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["services"] | ["services", _] => &[Namespace::Services, Namespace::Seo],
        ["technologies", _] => &[Namespace::Tech, Namespace::Seo],
        ["industries", _] => &[Namespace::Industries, Namespace::Seo],
        ["blog", _] => &[Namespace::Seo],
        [first] | [first, _] if first.starts_with("web-agency-") => &[Namespace::Cities],
        _ => &[],
    }
}
