//! Error category for generated method signatures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default category when none is configured.
pub const DEFAULT_METHOD_FAILURE_TYPE: &str = "Exception";

/// Named error category the downstream generator declares on emitted
/// resource methods. The name is free-form and not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodFailureType(String);

impl MethodFailureType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// True when this is the generic default category.
    pub fn is_generic(&self) -> bool {
        self.0 == DEFAULT_METHOD_FAILURE_TYPE
    }
}

impl Default for MethodFailureType {
    fn default() -> Self {
        Self::new(DEFAULT_METHOD_FAILURE_TYPE)
    }
}

impl fmt::Display for MethodFailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MethodFailureType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MethodFailureType {
    fn from(name: String) -> Self {
        Self(name)
    }
}
