// SPDX-License-Identifier: MPL-2.0
//! Translation bundle: a JSON tree addressed by dot-path keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A full set of translations for one locale, or a namespace slice of one.
///
/// Keys are dot-paths into nested objects (`"nav.services"`); only string
/// leaves are translations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle(Map<String, Value>);

impl Bundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a bundle from JSON. The document must be an object.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes).map(Self)
    }

    /// Returns the string at `key`, or `None` if the path is missing or does
    /// not end on a string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.0.get(first)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets the string at `key`, creating intermediate objects and replacing
    /// any non-object value standing in the way.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(leaf) = segments.pop() else {
            return;
        };
        let mut node = &mut self.0;
        for segment in segments {
            let entry = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(next) = entry else {
                return;
            };
            node = next;
        }
        node.insert(leaf.to_string(), Value::String(value.into()));
    }

    /// Deep-merges `other` into `self`.
    ///
    /// Objects are merged recursively; any other value in `other` overwrites
    /// the value at the same path. Keys only present in `self` are kept.
    pub fn merge(&mut self, other: Bundle) {
        merge_objects(&mut self.0, other.0);
    }

    /// All string leaf keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.0, "", &mut keys);
        keys.sort();
        keys
    }

    /// Number of string leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// No string leaves; a tree holding only non-string values is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn merge_objects(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, incoming) in source {
        match (target.get_mut(&key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_objects(existing, incoming);
            }
            (_, incoming) => {
                target.insert(key, incoming);
            }
        }
    }
}

fn collect_keys(map: &Map<String, Value>, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::String(_) => out.push(path),
            Value::Object(children) => collect_keys(children, &path, out),
            _ => {}
        }
    }
}
