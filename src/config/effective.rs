//! Effective generation settings
//!
//! The derived, read-only view handed to the downstream model generator.
//! It is recomputed from the stored configuration on every request and
//! never cached.
//!
//! A malformed override never fails resolution; the toggle's default is
//! used instead.

use serde::{Deserialize, Serialize};

use super::annotation::AnnotationStyle;
use super::toggles::{parse_lenient_bool, Toggle, ToggleOverrides};

/// Where a resolved toggle value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOrigin {
    /// No override map, or no entry for this key
    Default,
    /// Entry parsed as a boolean
    Override,
    /// Entry present but not a boolean; default used
    MalformedOverride,
}

/// One toggle's resolution with provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResolution {
    pub toggle: Toggle,

    /// Override key consulted
    pub key: String,

    /// Resolved value
    pub value: bool,

    pub origin: ToggleOrigin,

    /// Raw override text, when one was present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Resolve a single toggle against an optional override map.
pub fn resolve_toggle(overrides: Option<&ToggleOverrides>, toggle: Toggle) -> ToggleResolution {
    let key = toggle.key();
    let default = toggle.default_value();

    let raw = overrides
        .filter(|o| !o.is_empty())
        .and_then(|o| o.get(key));

    let (value, origin) = match raw {
        None => (default, ToggleOrigin::Default),
        Some(text) => match parse_lenient_bool(text) {
            Some(b) => (b, ToggleOrigin::Override),
            None => {
                tracing::debug!(
                    key,
                    raw = text,
                    default,
                    "override is not a boolean, using default"
                );
                (default, ToggleOrigin::MalformedOverride)
            }
        },
    };

    tracing::trace!(key, value, ?origin, "resolved toggle");

    ToggleResolution {
        toggle,
        key: key.to_string(),
        value,
        origin,
        raw: raw.map(str::to_string),
    }
}

/// Resolved generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveGenerationSettings {
    /// `generateBuilders` (default: true)
    pub generate_builders: bool,

    /// `includeHashcodeAndEquals` (default: false)
    pub include_hash_and_equality: bool,

    /// `includeToString` (default: false)
    pub include_string_representation: bool,

    /// `useLongIntegers` (default: false)
    pub use_wide_integers: bool,

    /// Passed through from the configuration
    pub annotation_style: AnnotationStyle,

    /// Passed through from the configuration
    pub use_validation_annotations: bool,
}

impl EffectiveGenerationSettings {
    /// Resolve every toggle and carry the pass-through fields.
    pub fn resolve(
        overrides: Option<&ToggleOverrides>,
        annotation_style: AnnotationStyle,
        use_validation_annotations: bool,
    ) -> Self {
        let value = |toggle| resolve_toggle(overrides, toggle).value;

        Self {
            generate_builders: value(Toggle::GenerateBuilders),
            include_hash_and_equality: value(Toggle::IncludeHashcodeAndEquals),
            include_string_representation: value(Toggle::IncludeToString),
            use_wide_integers: value(Toggle::UseLongIntegers),
            annotation_style,
            use_validation_annotations,
        }
    }

    /// Value of a named toggle in this view.
    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::GenerateBuilders => self.generate_builders,
            Toggle::IncludeHashcodeAndEquals => self.include_hash_and_equality,
            Toggle::IncludeToString => self.include_string_representation,
            Toggle::UseLongIntegers => self.use_wide_integers,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
