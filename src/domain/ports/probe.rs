//! Probe ports - abstraction over environment queries
//!
//! A check is built from one or more probes. Implementations:
//! - `CommandVersionProbe` / `GitIdentityProbe` - spawn a local command
//! - `LocalPathProbe` - existence checks under the project root
//! - test fakes that return canned answers

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Why a probe could not produce a usable value
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The command could not be started (usually not on PATH)
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    ExitStatus { command: String, status: String },

    /// The command printed something that is not usable
    #[error("`{command}` produced unusable output: {reason}")]
    InvalidOutput { command: String, reason: String },
}

/// Queries the version string of a tool (e.g. `v20.11.0`, `10.2.4`)
pub trait VersionProbe {
    /// Human-readable description of what is queried
    fn describe(&self) -> String;

    fn version(&self) -> ProbeResult<String>;
}

/// Configured source-control identity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Looks up the source-control identity (user name and email)
pub trait IdentityProbe {
    fn describe(&self) -> String;

    fn identity(&self) -> ProbeResult<Identity>;
}

/// Existence checks relative to the project root
pub trait PathProbe {
    fn root(&self) -> &Path;

    fn exists(&self, relative: &Path) -> bool;

    /// Absolute path a relative entry resolves to
    fn resolve(&self, relative: &Path) -> PathBuf {
        self.root().join(relative)
    }
}
