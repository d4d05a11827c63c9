//! JSON-mapping annotation styles for generated model code

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Annotation convention the downstream model generator emits.
///
/// Passed through to the effective settings untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AnnotationStyle {
    /// Jackson 1.x annotations (default)
    #[default]
    Jackson1,
    /// Jackson 2.x annotations
    Jackson2,
    /// Jackson, unversioned
    Jackson,
    /// Gson annotations
    Gson,
    /// No mapping annotations
    None,
}

impl AnnotationStyle {
    /// All styles in declaration order.
    pub const ALL: [AnnotationStyle; 5] = [
        AnnotationStyle::Jackson1,
        AnnotationStyle::Jackson2,
        AnnotationStyle::Jackson,
        AnnotationStyle::Gson,
        AnnotationStyle::None,
    ];

    /// The literal alias for this style.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Jackson1 => "jackson1",
            Self::Jackson2 => "jackson2",
            Self::Jackson => "jackson",
            Self::Gson => "gson",
            Self::None => "none",
        }
    }

    /// Aliases of every supported style, in declaration order.
    pub fn supported_aliases() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.alias()).collect()
    }

    /// Look up a style by its exact alias.
    pub fn from_alias(alias: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|s| s.alias() == alias)
            .ok_or_else(|| {
                ConfigError::unsupported("annotation style", alias, &Self::supported_aliases())
            })
    }
}

impl fmt::Display for AnnotationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

impl FromStr for AnnotationStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s)
    }
}

impl From<AnnotationStyle> for String {
    fn from(style: AnnotationStyle) -> Self {
        style.alias().to_string()
    }
}

impl TryFrom<String> for AnnotationStyle {
    type Error = ConfigError;

    fn try_from(alias: String) -> Result<Self, Self::Error> {
        Self::from_alias(&alias)
    }
}
