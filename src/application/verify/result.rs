//! Verify Result

use crate::domain::check::CheckRun;
use crate::domain::token::VerificationToken;

/// Outcome of one verification run.
///
/// `token` is `Some` exactly when `run.all_passed()`.
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub run: CheckRun,
    pub token: Option<VerificationToken>,
}

impl VerifyOutcome {
    pub fn is_success(&self) -> bool {
        self.run.all_passed()
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
