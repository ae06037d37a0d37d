//! Verify Use Case
//!
//! Single linear pass: run every check in order, fold each into the
//! aggregate as it completes, then issue a token if nothing failed.
//! No check is skipped because an earlier one failed.

use crate::application::checks::{
    check_dependencies, check_identity, check_package_manager, check_required_files,
    check_runtime, CheckKind,
};
use crate::domain::check::{Check, CheckRun};
use crate::domain::ports::{Clock, EntropySource, IdentityProbe, PathProbe, VersionProbe};
use crate::domain::token::VerificationToken;

use super::result::VerifyOutcome;

/// The probes a run draws on
pub struct ProbeSet {
    pub runtime: Box<dyn VersionProbe>,
    pub package_manager: Box<dyn VersionProbe>,
    pub identity: Box<dyn IdentityProbe>,
    pub paths: Box<dyn PathProbe>,
}

/// Verify use case - checks the environment and issues a token
///
/// Parameterized by its entropy source and clock so token issuance can be
/// made deterministic in tests.
pub struct VerifyUseCase<E, C>
where
    E: EntropySource,
    C: Clock,
{
    probes: ProbeSet,
    entropy: E,
    clock: C,
}

impl<E, C> VerifyUseCase<E, C>
where
    E: EntropySource,
    C: Clock,
{
    pub fn new(probes: ProbeSet, entropy: E, clock: C) -> Self {
        Self {
            probes,
            entropy,
            clock,
        }
    }

    /// Execute all checks
    pub fn execute(&self) -> VerifyOutcome {
        self.execute_with_callback(|_| {})
    }

    /// Execute with a callback invoked after each check (for streaming output)
    pub fn execute_with_callback<F>(&self, mut on_check: F) -> VerifyOutcome
    where
        F: FnMut(&Check),
    {
        let mut run = CheckRun::new();

        for kind in CheckKind::ALL {
            let check = self.run_check(kind);
            on_check(&check);
            run.record(check);
        }

        let token = run
            .all_passed()
            .then(|| VerificationToken::issue(&self.entropy, &self.clock));

        VerifyOutcome { run, token }
    }

    fn run_check(&self, kind: CheckKind) -> Check {
        let paths = self.probes.paths.as_ref();
        match kind {
            CheckKind::Runtime => check_runtime(self.probes.runtime.as_ref()),
            CheckKind::PackageManager => {
                check_package_manager(self.probes.package_manager.as_ref())
            }
            CheckKind::Identity => check_identity(self.probes.identity.as_ref()),
            CheckKind::Dependencies => check_dependencies(paths),
            CheckKind::RequiredFiles => check_required_files(paths),
        }
    }
}
