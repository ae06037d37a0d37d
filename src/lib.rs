//! taskmaster-verify - development environment verification
//!
//! Checks that a TaskMaster project checkout is ready to work on (runtime,
//! package manager, git identity, installed dependencies, required files)
//! and issues a one-time verification token when every check passes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ProbeSet, VerifyOutcome, VerifyUseCase};
pub use config::Config;
pub use domain::{Check, CheckRun, CheckStatus, VerificationToken};
pub use error::{VerifyError, VerifyResult};
pub use presentation::create_verify_use_case;
