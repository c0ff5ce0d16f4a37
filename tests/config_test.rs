//! Tests for session configuration loading.

use std::io::Write;
use strictly_tictactoe::{Mode, SessionConfig};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = config_file("mode = \"human-vs-random-ai\"\nseed = 42\n");
    let config = SessionConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.mode(), Mode::HumanVsRandomAi);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = config_file("");
    let config = SessionConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(config, SessionConfig::default());
    assert_eq!(*config.mode(), Mode::HumanVsHuman);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_unknown_mode_is_an_error() {
    let err = SessionConfig::from_toml("mode = \"self\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides_replace_given_values_only() {
    let base = SessionConfig::new(Mode::HumanVsRandomAi, Some(1));

    let same = base.clone().with_overrides(None, None);
    assert_eq!(same, base);

    let changed = base.with_overrides(Some(Mode::HumanVsSmartAi), Some(9));
    assert_eq!(*changed.mode(), Mode::HumanVsSmartAi);
    assert_eq!(*changed.seed(), Some(9));
}

#[test]
fn test_modes_use_kebab_case_names() {
    assert_eq!(
        serde_json::to_string(&Mode::HumanVsRandomAi).unwrap(),
        "\"human-vs-random-ai\""
    );
    let config: SessionConfig =
        serde_json::from_str(r#"{"mode":"human-vs-smart-ai","seed":null}"#).unwrap();
    assert_eq!(*config.mode(), Mode::HumanVsSmartAi);
}
