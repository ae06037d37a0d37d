//! Error types for taskmaster-verify
//!
//! Uses `thiserror` for library errors. Check failures are never errors:
//! they are recorded on the `CheckRun` and surfaced through the exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Main error type for library operations
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Config file exists but could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Project root passed on the command line does not exist
    #[error("project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
