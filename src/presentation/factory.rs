//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{ProbeSet, VerifyUseCase};
use crate::infrastructure::{
    CommandVersionProbe, GitIdentityProbe, LocalPathProbe, OsEntropy, SystemClock,
};

/// Type alias for the concrete VerifyUseCase with all dependencies
pub type ConcreteVerifyUseCase = VerifyUseCase<OsEntropy, SystemClock>;

/// Build the probes for `project_root`
pub fn create_probe_set(project_root: &Path) -> ProbeSet {
    ProbeSet {
        runtime: Box::new(CommandVersionProbe::new("node")),
        package_manager: Box::new(CommandVersionProbe::new("npm")),
        identity: Box::new(GitIdentityProbe::default()),
        paths: Box::new(LocalPathProbe::new(project_root)),
    }
}

/// Create a verify use case with all dependencies wired up
pub fn create_verify_use_case(project_root: &Path) -> ConcreteVerifyUseCase {
    VerifyUseCase::new(create_probe_set(project_root), OsEntropy, SystemClock)
}
