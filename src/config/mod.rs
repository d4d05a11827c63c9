//! Code-generation configuration resolution
//!
//! Holds the raw options for a generation run and derives the effective
//! settings consumed by the model generator:
//! 1. Hard-coded toggle defaults
//! 2. Layered string overrides, last layer wins
//! 3. Lenient boolean parsing, falling back to the default

mod annotation;
mod configuration;
mod effective;
mod error;
mod failure;
mod toggles;
mod version;

pub use annotation::AnnotationStyle;
pub use configuration::Configuration;
pub use effective::{resolve_toggle, EffectiveGenerationSettings, ToggleOrigin, ToggleResolution};
pub use error::ConfigError;
pub use failure::{MethodFailureType, DEFAULT_METHOD_FAILURE_TYPE};
pub use toggles::{parse_lenient_bool, Toggle, ToggleOverrides};
pub use version::ProtocolVersion;
