// SPDX-License-Identifier: MPL-2.0
//! Placeholder interpolation for translated strings.
//!
//! Site bundles use `{{name}}` placeholders. They are rewritten into a
//! one-message Fluent resource so argument values get Fluent's locale-aware
//! formatting (numbers in particular). Literal text is carried in Fluent
//! string literals, so the output keeps the template's whitespace and line
//! structure exactly.

use crate::domain::Locale;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};

const MESSAGE_ID: &str = "msg";

/// Replaces `{{name}}` placeholders in `template` with values from `args`.
///
/// Any template Fluent cannot represent, or a placeholder with no matching
/// argument, yields the template unchanged.
#[must_use]
pub fn interpolate(locale: Locale, template: &str, args: &FluentArgs) -> String {
    if !template.contains("{{") {
        return template.to_string();
    }
    let Some(source) = to_fluent_source(template) else {
        return template.to_string();
    };
    let Ok(resource) = FluentResource::try_new(format!("{MESSAGE_ID} = {source}\n")) else {
        return template.to_string();
    };

    let mut bundle = FluentBundle::new(vec![locale.language_id()]);
    bundle.set_use_isolating(false);
    if bundle.add_resource(resource).is_err() {
        return template.to_string();
    }
    let Some(pattern) = bundle.get_message(MESSAGE_ID).and_then(|msg| msg.value()) else {
        return template.to_string();
    };

    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, Some(args), &mut errors);
    if errors.is_empty() {
        value.into_owned()
    } else {
        template.to_string()
    }
}

/// Converts a `{{name}}` template into a single-line Fluent pattern.
fn to_fluent_source(template: &str) -> Option<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        push_text(&mut out, &rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}")?;
        let name = after[..end].trim();
        if !is_identifier(name) {
            return None;
        }
        out.push_str("{ $");
        out.push_str(name);
        out.push_str(" }");
        rest = &after[end + 2..];
    }
    push_text(&mut out, rest);
    Some(out)
}

/// Appends `text` as a Fluent string literal placeable.
fn push_text(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str("{ \"");
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push_str(&format!("\\u{:04X}", u32::from(ch))),
            _ => out.push(ch),
        }
    }
    out.push_str("\" }");
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
