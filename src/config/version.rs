//! Protocol version selector
//!
//! Closed set of API-generation target conventions, each addressed by a
//! literal alias. Lookup is exact string equality: no trimming, no case
//! folding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Supported protocol versions, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ProtocolVersion {
    /// Version 1.1 (default)
    #[default]
    V1,
    /// Version 2.0
    V2,
}

impl ProtocolVersion {
    /// All versions in declaration order.
    pub const ALL: [ProtocolVersion; 2] = [ProtocolVersion::V1, ProtocolVersion::V2];

    /// The literal alias for this version.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::V1 => "1.1",
            Self::V2 => "2.0",
        }
    }

    /// Aliases of every supported version, in declaration order.
    pub fn supported_aliases() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.alias()).collect()
    }

    /// Look up a version by its exact alias.
    pub fn from_alias(alias: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|v| v.alias() == alias)
            .ok_or_else(|| {
                ConfigError::unsupported("protocol version", alias, &Self::supported_aliases())
            })
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

impl FromStr for ProtocolVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s)
    }
}

impl From<ProtocolVersion> for String {
    fn from(version: ProtocolVersion) -> Self {
        version.alias().to_string()
    }
}

impl TryFrom<String> for ProtocolVersion {
    type Error = ConfigError;

    fn try_from(alias: String) -> Result<Self, Self::Error> {
        Self::from_alias(&alias)
    }
}
