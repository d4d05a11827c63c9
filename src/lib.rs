//! RAML code-generation configuration
//!
//! This crate holds the options for a RAML to JAX-RS generation run,
//! validates restricted-choice fields against their supported aliases, and
//! derives the effective settings handed to the JSON-schema model generator.

pub mod config;

pub use config::{
    AnnotationStyle, ConfigError, Configuration, EffectiveGenerationSettings, MethodFailureType,
    ProtocolVersion, Toggle, ToggleOrigin, ToggleOverrides, ToggleResolution,
};
