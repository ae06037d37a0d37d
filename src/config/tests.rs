//! Tests for the config module

use super::loader::{apply_env_overrides, discover, load_with_warnings};
use super::types::*;
use crate::error::VerifyError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.output.color, ColorMode::Never);
    assert!(config.output.unicode);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("verify.toml");
    fs::write(&path, "[output]\ncolr = \"never\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.output.color, ColorMode::Auto);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "colr");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("color"));
}

#[test]
fn test_requirements_section_is_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("verify.toml");
    fs::write(
        &path,
        "[requirements]\nruntime_min_major = 0\nrequired_files = [\"package.json\"]\n",
    )
    .unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "requirements");
    assert_eq!(warnings[0].line, Some(1));
}

#[test]
fn test_load_with_warnings_rejects_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("verify.toml");
    fs::write(&path, "[output\ncolor = \"never\"\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, VerifyError::InvalidConfig { .. }));
}

#[test]
fn test_discover_prefers_project_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();

    fs::create_dir_all(project.path().join(".taskmaster")).unwrap();
    fs::write(project.path().join(".taskmaster/verify.toml"), "").unwrap();
    fs::create_dir_all(user.path().join("taskmaster")).unwrap();
    fs::write(user.path().join("taskmaster/verify.toml"), "").unwrap();

    let found = discover(project.path(), Some(user.path())).unwrap();
    assert_eq!(found, project.path().join(".taskmaster/verify.toml"));
}

#[test]
fn test_discover_falls_back_to_user_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::create_dir_all(user.path().join("taskmaster")).unwrap();
    fs::write(user.path().join("taskmaster/verify.toml"), "").unwrap();

    let found = discover(project.path(), Some(user.path())).unwrap();
    assert_eq!(found, user.path().join("taskmaster/verify.toml"));
}

#[test]
fn test_discover_none_without_files() {
    let project = tempdir().unwrap();
    assert!(discover(project.path(), None).is_none());
}

#[test]
fn test_env_overrides_apply_valid_values() {
    let mut sink = Vec::new();
    let config = apply_env_overrides(
        Config::default(),
        env(&[("TASKMASTER_COLOR", "Always"), ("TASKMASTER_UNICODE", "0")]),
        &mut sink,
    );

    assert_eq!(config.output.color, ColorMode::Always);
    assert!(!config.output.unicode);
    assert!(sink.is_empty());
}

#[test]
fn test_env_overrides_keep_current_value_on_invalid_input() {
    let mut sink = Vec::new();
    let config = apply_env_overrides(
        Config::default(),
        env(&[("TASKMASTER_COLOR", "allways")]),
        &mut sink,
    );

    assert_eq!(config.output.color, ColorMode::Auto);

    let msg = String::from_utf8(sink).unwrap();
    assert!(msg.contains("Did you mean 'always'?"), "got: {}", msg);
}

#[test]
fn test_env_overrides_ignore_threshold_variables() {
    let mut sink = Vec::new();
    let config = apply_env_overrides(
        Config::default(),
        env(&[
            ("TASKMASTER_RUNTIME_MIN_MAJOR", "0"),
            ("TASKMASTER_PACKAGE_MANAGER_MIN_MAJOR", "0"),
        ]),
        &mut sink,
    );

    assert_eq!(config, Config::default());
    assert!(sink.is_empty());
}
