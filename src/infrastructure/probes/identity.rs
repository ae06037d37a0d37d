use crate::domain::ports::{Identity, IdentityProbe, ProbeResult};

use super::command::run_command;

/// Reads `user.name` and `user.email` from git configuration.
///
/// `git config <key>` exits 1 for an unset key, which surfaces as a probe
/// error; both lookups must succeed for an `Identity` to be returned.
#[derive(Debug, Clone)]
pub struct GitIdentityProbe {
    program: String,
}

impl GitIdentityProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitIdentityProbe {
    fn default() -> Self {
        Self::new("git")
    }
}

impl IdentityProbe for GitIdentityProbe {
    fn describe(&self) -> String {
        format!("{} config user.name / user.email", self.program)
    }

    fn identity(&self) -> ProbeResult<Identity> {
        let name = run_command(&self.program, &["config", "user.name"])?;
        let email = run_command(&self.program, &["config", "user.email"])?;
        Ok(Identity { name, email })
    }
}
