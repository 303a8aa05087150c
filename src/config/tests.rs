//! Configuration tests
//!
//! The default template must parse back into the same values, and every
//! layer (env, file, default) must land where it is supposed to.

use super::*;
use std::collections::HashMap;
use std::path::PathBuf;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized default config parses back to the defaults.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::resolve(parsed.unwrap(), no_env);
    let defaults = Config::default();
    assert_eq!(config.variant, defaults.variant);
    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.toast, defaults.toast);
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.logging.file_enabled, defaults.logging.file_enabled);
    assert_eq!(config.logging.file_dir, defaults.logging.file_dir);
    assert_eq!(config.logging.file_rotation, defaults.logging.file_rotation);
    assert_eq!(config.logging.file_prefix, defaults.logging.file_prefix);
}

#[test]
fn test_config_roundtrip_non_default_values() {
    let mut config = Config::default();
    config.variant = FormVariant::FixedTarget;
    config.theme = "light".to_string();
    config.toast.duration_ms = 500;
    config.logging.file_rotation = LogRotation::Never;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let back = Config::resolve(parsed, no_env);

    assert_eq!(back.variant, FormVariant::FixedTarget);
    assert_eq!(back.theme, "light");
    assert_eq!(back.toast.duration_ms, 500);
    assert_eq!(back.logging.file_rotation, LogRotation::Never);
}

// ─────────────────────────────────────────────────────────────────────────────
// Layering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config.variant, FormVariant::Generic);
    assert_eq!(config.theme, DEFAULT_THEME);
    assert_eq!(config.toast.duration_ms, 3000);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
[form]
variant = "coming-soon"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, no_env);
    assert_eq!(config.variant, FormVariant::ComingSoon);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.theme, DEFAULT_THEME);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "dark"
[form]
variant = "generic"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("SLIPCONV_VARIANT", "fixed-target"),
        ("SLIPCONV_THEME", "light"),
    ]);
    let config = Config::resolve(file, env);
    assert_eq!(config.variant, FormVariant::FixedTarget);
    assert_eq!(config.theme, "light");
}

#[test]
fn test_unknown_variant_falls_back_to_default() {
    let env = env_from(&[("SLIPCONV_VARIANT", "teleport")]);
    let config = Config::resolve(FileConfig::default(), env);
    assert_eq!(config.variant, FormVariant::Generic);
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// File IO
// ─────────────────────────────────────────────────────────────────────────────

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("slipconv-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_missing_file_is_not_an_error() {
    let dir = scratch_dir("missing");
    let file = Config::load_file_config(&dir.join("config.toml")).unwrap();
    assert!(file.form.is_none());
}

#[test]
fn test_write_default_then_load() {
    let dir = scratch_dir("write");
    let path = dir.join("nested").join("config.toml");

    Config::write_default(&path).unwrap();
    let file = Config::load_file_config(&path).unwrap();
    assert_eq!(file.form.and_then(|f| f.variant).as_deref(), Some("generic"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_broken_file_is_an_error() {
    let dir = scratch_dir("broken");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "theme = dark\n[form\n").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse"));

    let _ = std::fs::remove_dir_all(&dir);
}
