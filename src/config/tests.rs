//! Configuration tests
//!
//! The TOML template is the single source of truth for the config file, so
//! these tests make sure it parses back and that every field survives.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved.persons, config.persons);
    assert_eq!(resolved.theme, "classic");
    assert!(!resolved.show_persons);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.show_persons = true;
    config.theme = "mono".to_string();
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.persons = vec![
        PersonSeed::new("Grace \"Amazing\" Hopper", 85),
        PersonSeed::new("", 0),
    ];

    let file = Config::parse_file(&config.to_toml()).expect("custom config should parse");
    let resolved = Config::resolve(file, no_env);

    assert!(resolved.show_persons);
    assert_eq!(resolved.theme, "mono");
    assert_eq!(resolved.logging.level, "debug");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(resolved.persons, config.persons);
}

#[test]
fn test_config_roundtrip_control_characters() {
    let mut config = Config::default();
    config.theme = "tab\there".to_string();
    config.logging.file_prefix = "back\\slash".to_string();
    config.persons = vec![
        PersonSeed::new("Esc\u{1b}ape", 30),
        PersonSeed::new("Nul\0Line\nBreak", 31),
        PersonSeed::new("it's \"quoted\"", 32),
    ];

    let toml_str = config.to_toml();
    let parsed = Config::parse_file(&toml_str);
    assert!(
        parsed.is_ok(),
        "Names with control characters should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved.persons, config.persons);
    assert_eq!(resolved.theme, "tab\there");
    assert_eq!(resolved.logging.file_prefix, "back\\slash");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let resolved = Config::resolve(Config::parse_file("").unwrap(), no_env);
    assert_eq!(resolved.persons, default_seeds());
    assert_eq!(resolved.logging.file_prefix, "cards");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file(
        r#"
show_persons = false
theme = "classic"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [("CARDS_SHOW", "true"), ("CARDS_THEME", "mono")].into();
    let resolved = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

    assert!(resolved.show_persons);
    assert_eq!(resolved.theme, "mono");
}

#[test]
fn test_persons_section_replaces_seeds() {
    let file = Config::parse_file(
        r#"
[[persons]]
name = "Ada"
age = 36
"#,
    )
    .unwrap();

    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.persons, vec![PersonSeed::new("Ada", 36)]);
}

#[test]
fn test_invalid_file_is_an_error() {
    assert!(Config::parse_file("show_persons = maybe").is_err());
    assert!(Config::parse_file("[[persons]]\nname = \"Ada\"\nage = -1\n").is_err());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}
