//! Effective Settings Tests
//!
//! Default resolution, overrides, and repeatability of the derived view.

use raml_codegen_config::{
    AnnotationStyle, Configuration, Toggle, ToggleOrigin, ToggleOverrides,
};
use serde_json::json;
use std::path::PathBuf;

fn config_with(pairs: &[(&str, &str)]) -> Configuration {
    let mut config = Configuration::new();
    config.set_toggle_overrides(Some(pairs.iter().copied().collect()));
    config
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_no_override_map_uses_defaults() {
    let settings = Configuration::new().build_effective_settings();

    assert!(settings.generate_builders);
    assert!(!settings.include_hash_and_equality);
    assert!(!settings.include_string_representation);
    assert!(!settings.use_wide_integers);
    assert_eq!(settings.annotation_style, AnnotationStyle::Jackson1);
    assert!(!settings.use_validation_annotations);
}

#[test]
fn test_empty_override_map_uses_defaults() {
    let settings = config_with(&[]).build_effective_settings();
    assert_eq!(settings, Configuration::new().build_effective_settings());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn test_single_override_leaves_others_at_default() {
    let settings = config_with(&[("useLongIntegers", "true")]).build_effective_settings();

    assert!(settings.use_wide_integers);
    assert!(settings.generate_builders);
    assert!(!settings.include_hash_and_equality);
    assert!(!settings.include_string_representation);
}

#[test]
fn test_malformed_override_falls_back_to_default() {
    let config = config_with(&[("includeToString", "notABoolean")]);
    let settings = config.build_effective_settings();

    assert!(!settings.include_string_representation);
}

#[test]
fn test_override_values_are_case_insensitive() {
    // Assumes lenient parsing ignores case for "true"/"false".
    let settings = config_with(&[
        ("generateBuilders", "FALSE"),
        ("includeHashcodeAndEquals", "True"),
    ])
    .build_effective_settings();

    assert!(!settings.generate_builders);
    assert!(settings.include_hash_and_equality);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let settings = config_with(&[("useJodaDates", "true"), ("includeJsr303", "true")])
        .build_effective_settings();
    assert_eq!(settings, Configuration::new().build_effective_settings());
}

#[test]
fn test_layered_overrides_from_json() {
    let mut config = Configuration::new();
    config.apply_override_layer(ToggleOverrides::from_json(&json!({
        "generateBuilders": false,
        "includeToString": true
    })));
    config.apply_override_layer(ToggleOverrides::from_json(&json!({
        "includeToString": "false"
    })));

    let settings = config.build_effective_settings();
    assert!(!settings.generate_builders);
    assert!(!settings.include_string_representation);
}

// =============================================================================
// Repeatability
// =============================================================================

#[test]
fn test_repeated_builds_are_equal_and_do_not_mutate() {
    let mut config = config_with(&[("includeToString", "true"), ("useLongIntegers", "bogus")]);
    config.set_output_directory(Some(PathBuf::from("target/generated-sources")));
    config.set_protocol_version("2.0").unwrap();
    config.set_annotation_style(AnnotationStyle::Jackson2);

    let before = config.clone();
    let first = config.build_effective_settings();
    let second = config.build_effective_settings();

    assert_eq!(first, second);
    assert_eq!(config, before);
}

// =============================================================================
// Provenance
// =============================================================================

#[test]
fn test_explain_toggles_report() {
    let config = config_with(&[("includeToString", "true"), ("useLongIntegers", "")]);
    let report = config.explain_toggles();

    let origins: Vec<_> = report.iter().map(|r| (r.toggle, r.origin)).collect();
    assert_eq!(
        origins,
        vec![
            (Toggle::GenerateBuilders, ToggleOrigin::Default),
            (Toggle::IncludeHashcodeAndEquals, ToggleOrigin::Default),
            (Toggle::IncludeToString, ToggleOrigin::Override),
            (Toggle::UseLongIntegers, ToggleOrigin::MalformedOverride),
        ]
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json[2]["key"], "includeToString");
    assert_eq!(json[2]["origin"], "override");
    assert_eq!(json[3]["raw"], "");
    assert!(json[0].get("raw").is_none());
}
