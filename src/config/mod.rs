//! Configuration module
//!
//! Configuration hierarchy (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (TASKMASTER_*)
//! 3. Project config (.taskmaster/verify.toml)
//! 4. User config (<config dir>/taskmaster/verify.toml)
//! 5. Built-in defaults
//!
//! Project and user config files are alternatives, not layers: the first
//! one found is used.

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover, ConfigWarning, LoadedConfig, PROJECT_CONFIG_PATH, USER_CONFIG_PATH,
};
pub use types::{ColorMode, Config, OutputConfig};
