//! Configuration discovery and loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{VerifyError, VerifyResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Project config location, relative to the project root
pub const PROJECT_CONFIG_PATH: &str = ".taskmaster/verify.toml";

/// User config location, relative to the platform config directory
pub const USER_CONFIG_PATH: &str = "taskmaster/verify.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> VerifyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VerifyError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file that applies to `project_root`.
///
/// A project config wins over the user config; they are not merged.
pub fn discover(project_root: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    let project_config = project_root.join(PROJECT_CONFIG_PATH);
    if project_config.is_file() {
        return Some(project_config);
    }

    let user_config = user_config_dir?.join(USER_CONFIG_PATH);
    user_config.is_file().then_some(user_config)
}

/// Load from project config, user config, or defaults, then apply env overrides
pub fn load_for_project(project_root: &Path) -> VerifyResult<LoadedConfig> {
    let user_dir = dirs::config_dir();
    let source = discover(project_root, user_dir.as_deref());

    let (config, warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (TASKMASTER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(
        config,
        |key| std::env::var(key).ok(),
        &mut std::io::stderr(),
    )
}

pub(crate) fn apply_env_overrides<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(val) = get_env("TASKMASTER_COLOR") {
        let validator = EnvVarValidator::new("TASKMASTER_COLOR", &["auto", "always", "never"]);
        config.output.color = validator.parse_with_writer(
            &val,
            |s| match s.to_lowercase().as_str() {
                "auto" => Some(ColorMode::Auto),
                "always" => Some(ColorMode::Always),
                "never" => Some(ColorMode::Never),
                _ => None,
            },
            config.output.color,
            warnings,
        );
    }

    if let Some(val) = get_env("TASKMASTER_UNICODE") {
        let validator = EnvVarValidator::new("TASKMASTER_UNICODE", &["true", "false", "1", "0"]);
        config.output.unicode = validator.parse_with_writer(
            &val,
            |s| match s.to_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            config.output.unicode,
            warnings,
        );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "color", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
