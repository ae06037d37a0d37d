use crate::domain::ports::{ProbeError, ProbeResult, VersionProbe};

use super::command::{display_command, run_command};

/// Asks a tool for its version via `<program> --version`
#[derive(Debug, Clone)]
pub struct CommandVersionProbe {
    program: String,
}

impl CommandVersionProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl VersionProbe for CommandVersionProbe {
    fn describe(&self) -> String {
        display_command(&self.program, &["--version"])
    }

    fn version(&self) -> ProbeResult<String> {
        let out = run_command(&self.program, &["--version"])?;
        // Some tools print a banner; the version is on the first line.
        match out.lines().next().map(str::trim) {
            Some(line) if !line.is_empty() => Ok(line.to_string()),
            _ => Err(ProbeError::InvalidOutput {
                command: self.describe(),
                reason: "empty version output".to_string(),
            }),
        }
    }
}
