//! Code-generation configuration
//!
//! Assembled once by the caller through its setters, then read by the
//! generation pipeline for the rest of a run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::annotation::AnnotationStyle;
use super::effective::{resolve_toggle, EffectiveGenerationSettings, ToggleResolution};
use super::error::ConfigError;
use super::failure::MethodFailureType;
use super::toggles::{Toggle, ToggleOverrides};
use super::version::ProtocolVersion;

/// Raw code-generation options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    output_directory: Option<PathBuf>,
    source_directory: Option<PathBuf>,
    protocol_version: ProtocolVersion,
    base_package_name: Option<String>,
    use_validation_annotations: bool,
    annotation_style: AnnotationStyle,
    toggle_overrides: Option<ToggleOverrides>,
    method_failure_type: MethodFailureType,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the effective settings view.
    ///
    /// Pure: repeated calls without mutation in between return equal values.
    pub fn build_effective_settings(&self) -> EffectiveGenerationSettings {
        EffectiveGenerationSettings::resolve(
            self.toggle_overrides.as_ref(),
            self.annotation_style,
            self.use_validation_annotations,
        )
    }

    /// Per-toggle resolution with provenance, in [`Toggle::ALL`] order.
    pub fn explain_toggles(&self) -> Vec<ToggleResolution> {
        Toggle::ALL
            .into_iter()
            .map(|toggle| resolve_toggle(self.toggle_overrides.as_ref(), toggle))
            .collect()
    }

    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }

    pub fn set_output_directory(&mut self, dir: Option<PathBuf>) {
        self.output_directory = dir;
    }

    pub fn source_directory(&self) -> Option<&Path> {
        self.source_directory.as_deref()
    }

    pub fn set_source_directory(&mut self, dir: Option<PathBuf>) {
        self.source_directory = dir;
    }

    pub fn protocol_version(&self) -> ProtocolVersion {
        self.protocol_version
    }

    /// Select the protocol version by alias (`"1.1"`, `"2.0"`).
    ///
    /// On an unknown alias the stored version is left unchanged and the
    /// error must be treated as fatal by the caller.
    pub fn set_protocol_version(&mut self, alias: &str) -> Result<ProtocolVersion, ConfigError> {
        let version = ProtocolVersion::from_alias(alias)?;
        self.protocol_version = version;
        Ok(version)
    }

    /// Select an already-resolved protocol version.
    pub fn use_protocol_version(&mut self, version: ProtocolVersion) {
        self.protocol_version = version;
    }

    pub fn base_package_name(&self) -> Option<&str> {
        self.base_package_name.as_deref()
    }

    /// Any string is accepted, including the empty string.
    pub fn set_base_package_name(&mut self, name: Option<String>) {
        self.base_package_name = name;
    }

    pub fn use_validation_annotations(&self) -> bool {
        self.use_validation_annotations
    }

    pub fn set_use_validation_annotations(&mut self, enabled: bool) {
        self.use_validation_annotations = enabled;
    }

    pub fn annotation_style(&self) -> AnnotationStyle {
        self.annotation_style
    }

    pub fn set_annotation_style(&mut self, style: AnnotationStyle) {
        self.annotation_style = style;
    }

    /// Select the annotation style by alias (e.g. `"jackson2"`).
    pub fn set_annotation_style_alias(&mut self, alias: &str) -> Result<AnnotationStyle, ConfigError> {
        let style = AnnotationStyle::from_alias(alias)?;
        self.annotation_style = style;
        Ok(style)
    }

    pub fn toggle_overrides(&self) -> Option<&ToggleOverrides> {
        self.toggle_overrides.as_ref()
    }

    pub fn set_toggle_overrides(&mut self, overrides: Option<ToggleOverrides>) {
        self.toggle_overrides = overrides;
    }

    /// Merge a layer over the stored overrides; the layer wins per key.
    pub fn apply_override_layer(&mut self, layer: ToggleOverrides) {
        self.toggle_overrides
            .get_or_insert_with(ToggleOverrides::new)
            .merge(layer);
    }

    pub fn method_failure_type(&self) -> &MethodFailureType {
        &self.method_failure_type
    }

    pub fn set_method_failure_type(&mut self, failure: MethodFailureType) {
        self.method_failure_type = failure;
    }
}
