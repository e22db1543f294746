//! Tests for config functionality.

use crate::config::{Config, Framework};
use crate::test_support::DirGuard;
use serial_test::serial;
use std::collections::HashMap;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.framework, Framework::Html);
    assert_eq!(config.theme, "minimal");
    assert_eq!(config.sections, vec!["hero", "features", "pricing", "footer"]);
    assert_eq!(config.claude_cmd, "claude");
    assert_eq!(config.output_dir, "output");
    assert_eq!(config.timeout_seconds, 300);
    assert_eq!(config.max_implementation_attempts, 2);
    assert_eq!(config.summarize_threshold_words, 300);
    assert!(config.track_usage);
    assert_eq!(config.usage_cmd, "ccusage --json --order desc");
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.theme, "minimal");
    assert_eq!(config.framework, Framework::Html);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
framework: react
theme: brutalist
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.framework, Framework::React);
    assert_eq!(config.theme, "brutalist");

    // Unspecified values should use defaults
    assert_eq!(config.claude_cmd, "claude");
    assert_eq!(config.sections.len(), 4);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
framework: html
theme: terminal
sections: [hero, pricing]
output_dir: site
claude_cmd: "claude --model sonnet"
timeout_seconds: 60
max_implementation_attempts: 3
summarize_threshold_words: 150
track_usage: false
usage_cmd: "npx ccusage --json"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.theme, "terminal");
    assert_eq!(config.sections, vec!["hero", "pricing"]);
    assert_eq!(config.output_dir, "site");
    assert_eq!(config.claude_cmd, "claude --model sonnet");
    assert_eq!(config.timeout_seconds, 60);
    assert_eq!(config.max_implementation_attempts, 3);
    assert_eq!(config.summarize_threshold_words, 150);
    assert!(!config.track_usage);
    assert_eq!(config.usage_cmd, "npx ccusage --json");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = Config::from_yaml("theme: dark\nfuture_option: 42\n").unwrap();
    assert_eq!(config.theme, "dark");
}

#[test]
fn test_validate_rejects_unknown_theme() {
    let err = Config::from_yaml("theme: sparkly").unwrap_err();
    assert!(err.to_string().contains("unknown theme 'sparkly'"));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let err = Config::from_yaml("timeout_seconds: 0").unwrap_err();
    assert!(err.to_string().contains("timeout_seconds"));
}

#[test]
fn test_validate_rejects_unbalanced_quotes_in_command() {
    let err = Config::from_yaml("claude_cmd: \"claude 'oops\"").unwrap_err();
    assert!(err.to_string().contains("could not be parsed"));
}

#[test]
fn test_invalid_framework_is_parse_error() {
    assert!(Config::from_yaml("framework: vue").is_err());
}

#[test]
fn test_env_overrides_apply() {
    let env: HashMap<&str, &str> = [
        ("CCUX_CLAUDE_CMD", "/opt/bin/claude"),
        ("CCUX_DEFAULT_THEME", "playful"),
        ("CCUX_OUTPUT_DIR", "pages"),
    ]
    .into_iter()
    .collect();

    let mut config = Config::default();
    config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.claude_cmd, "/opt/bin/claude");
    assert_eq!(config.theme, "playful");
    assert_eq!(config.output_dir, "pages");
}

#[test]
fn test_env_override_with_unknown_theme_is_skipped() {
    let mut config = Config::default();
    config.apply_env_overrides(|key| {
        (key == "CCUX_DEFAULT_THEME").then(|| "not-a-theme".to_string())
    });
    assert_eq!(config.theme, "minimal");
}

#[test]
fn test_empty_env_values_are_ignored() {
    let mut config = Config::default();
    config.apply_env_overrides(|_| Some("  ".to_string()));
    assert_eq!(config.claude_cmd, "claude");
    assert_eq!(config.output_dir, "output");
}

#[test]
fn test_resolve_framework_and_theme() {
    let config = Config::default();

    assert_eq!(config.resolve_framework(None).unwrap(), Framework::Html);
    assert_eq!(
        config.resolve_framework(Some("React")).unwrap(),
        Framework::React
    );
    assert!(config.resolve_framework(Some("svelte")).is_err());

    assert_eq!(config.resolve_theme(None).unwrap(), "minimal");
    assert_eq!(config.resolve_theme(Some("Dark")).unwrap(), "dark");
    assert!(config.resolve_theme(Some("neon")).is_err());
}

#[test]
#[serial]
fn test_load_or_default_reads_file_in_cwd() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("ccux.yaml"), "theme: corporate\n").unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let config = Config::load_or_default(None);
    assert_eq!(config.theme, "corporate");
}

#[test]
#[serial]
fn test_load_or_default_falls_back_on_broken_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("ccux.yaml"), "theme: [unclosed\n").unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let config = Config::load_or_default(None);
    assert_eq!(config.theme, "minimal");
}

#[test]
fn test_yaml_round_trip_keeps_values() {
    let mut config = Config::default();
    config.theme = "data".to_string();
    config.timeout_seconds = 42;

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.theme, "data");
    assert_eq!(parsed.timeout_seconds, 42);
}
