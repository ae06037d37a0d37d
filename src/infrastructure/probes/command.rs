use std::io;
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{ProbeError, ProbeResult};

/// Run a read-only query command and return its trimmed stdout.
///
/// Blocks until the command exits; no timeout is applied.
pub fn run_command(program: &str, args: &[&str]) -> ProbeResult<String> {
    let display = display_command(program, args);

    let output = spawn(program, args).map_err(|source| ProbeError::Spawn {
        command: display.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(ProbeError::ExitStatus {
            command: display,
            status: output.status.to_string(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| ProbeError::InvalidOutput {
        command: display.clone(),
        reason: "output is not valid UTF-8".to_string(),
    })?;

    Ok(stdout.trim().to_string())
}

fn spawn_exact(program: &str, args: &[&str]) -> io::Result<Output> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
}

#[cfg(not(windows))]
fn spawn(program: &str, args: &[&str]) -> io::Result<Output> {
    spawn_exact(program, args)
}

/// Windows package managers ship as `.cmd` shims, which `CreateProcess`
/// does not find from the bare name.
#[cfg(windows)]
fn spawn(program: &str, args: &[&str]) -> io::Result<Output> {
    match spawn_exact(program, args) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            spawn_exact(&format!("{}.cmd", program), args).map_err(|_| e)
        }
        result => result,
    }
}

pub(crate) fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        return program.to_string();
    }
    format!("{} {}", program, args.join(" "))
}
