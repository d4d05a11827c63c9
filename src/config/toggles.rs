//! Named boolean toggles and their string overrides
//!
//! Overrides are layered:
//! - Keys: free-form, not checked against the known toggle list
//! - Values: raw text, parsed leniently at resolution time
//! - Layers: last layer wins per key, earlier keys survive

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Boolean generation options that can be overridden by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    GenerateBuilders,
    IncludeHashcodeAndEquals,
    IncludeToString,
    UseLongIntegers,
}

impl Toggle {
    /// All toggles in resolution order.
    pub const ALL: [Toggle; 4] = [
        Toggle::GenerateBuilders,
        Toggle::IncludeHashcodeAndEquals,
        Toggle::IncludeToString,
        Toggle::UseLongIntegers,
    ];

    /// Override key (case-sensitive).
    pub fn key(&self) -> &'static str {
        match self {
            Self::GenerateBuilders => "generateBuilders",
            Self::IncludeHashcodeAndEquals => "includeHashcodeAndEquals",
            Self::IncludeToString => "includeToString",
            Self::UseLongIntegers => "useLongIntegers",
        }
    }

    /// Hard-coded value used when no usable override exists.
    pub fn default_value(&self) -> bool {
        match self {
            Self::GenerateBuilders => true,
            Self::IncludeHashcodeAndEquals => false,
            Self::IncludeToString => false,
            Self::UseLongIntegers => false,
        }
    }

    /// Find the toggle for an exact override key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Parse an override value as a boolean.
///
/// Only `true`/`false` are recognized, ignoring ASCII case. Anything else,
/// including the empty string, is `None`.
pub fn parse_lenient_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Toggle name to raw textual override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleOverrides(HashMap<String, String>);

impl ToggleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` onto `self`; keys in `other` win.
    pub fn merge(&mut self, other: ToggleOverrides) {
        self.0.extend(other.0);
    }

    /// Merge layers in order (first is base, last has highest precedence).
    pub fn merge_layers(layers: impl IntoIterator<Item = ToggleOverrides>) -> Self {
        layers.into_iter().fold(Self::new(), |mut acc, layer| {
            acc.merge(layer);
            acc
        })
    }

    /// Collect overrides from a JSON object.
    ///
    /// Strings are kept verbatim, other scalars use their JSON text.
    /// Null, arrays and nested objects are skipped. A non-object yields
    /// no overrides.
    pub fn from_json(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::new();
        };

        map.iter()
            .filter_map(|(key, val)| {
                let raw = match val {
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key.clone(), raw))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ToggleOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for ToggleOverrides {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}
