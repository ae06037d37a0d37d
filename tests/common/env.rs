//! Test environment builder for isolated verifier runs.
//!
//! Every run gets its own project directory, its own HOME (so no user config
//! leaks in) and a `PATH` containing only generated shell-script probes.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the verifier binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// The line reporting the named check, if any
    pub fn check_line(&self, name: &str) -> Option<&str> {
        let needle = format!(" {}: ", name);
        self.stdout.lines().find(|l| l.contains(&needle))
    }
}

/// Isolated environment for one verifier run.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    pub bin_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run the verifier from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the verifier from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_clear()
            .env("PATH", self.bin_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("TERM", "dumb")
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute taskmaster-verify");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for `TestEnv`.
///
/// `TestEnvBuilder::new()` starts from a healthy machine: node v20, npm 10,
/// a complete git identity, `node_modules`, `package.json` and `README.md`.
pub struct TestEnvBuilder {
    node: Option<String>,
    npm: Option<String>,
    git_name: Option<String>,
    git_email: Option<String>,
    git_installed: bool,
    node_modules: bool,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            node: Some("v20.11.0".to_string()),
            npm: Some("10.2.4".to_string()),
            git_name: Some("Ada Lovelace".to_string()),
            git_email: Some("ada@example.com".to_string()),
            git_installed: true,
            node_modules: true,
            files: vec![
                ("package.json".to_string(), "{}\n".to_string()),
                ("README.md".to_string(), "# app\n".to_string()),
            ],
        }
    }

    pub fn with_node(mut self, version: &str) -> Self {
        self.node = Some(version.to_string());
        self
    }

    pub fn without_node(mut self) -> Self {
        self.node = None;
        self
    }

    pub fn with_npm(mut self, version: &str) -> Self {
        self.npm = Some(version.to_string());
        self
    }

    pub fn without_git(mut self) -> Self {
        self.git_installed = false;
        self
    }

    pub fn without_git_email(mut self) -> Self {
        self.git_email = None;
        self
    }

    pub fn without_node_modules(mut self) -> Self {
        self.node_modules = false;
        self
    }

    pub fn without_file(mut self, name: &str) -> Self {
        self.files.retain(|(f, _)| f != name);
        self
    }

    pub fn with_project_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = tempfile::tempdir().expect("create project dir");
        let home_dir = tempfile::tempdir().expect("create home dir");
        let bin_dir = tempfile::tempdir().expect("create bin dir");

        if let Some(v) = &self.node {
            write_script(bin_dir.path(), "node", &format!("echo \"{}\"\n", v));
        }
        if let Some(v) = &self.npm {
            write_script(bin_dir.path(), "npm", &format!("echo \"{}\"\n", v));
        }
        if self.git_installed {
            write_script(
                bin_dir.path(),
                "git",
                &git_script(self.git_name.as_deref(), self.git_email.as_deref()),
            );
        }

        if self.node_modules {
            std::fs::create_dir_all(project_root.path().join("node_modules"))
                .expect("create node_modules");
        }
        for (name, content) in &self.files {
            let path = project_root.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create parent dir");
            }
            std::fs::write(path, content).expect("write project file");
        }

        TestEnv {
            project_root,
            home_dir,
            bin_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_taskmaster-verify")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `git config <key>` prints the value, or exits 1 when the key is unset
fn git_script(name: Option<&str>, email: Option<&str>) -> String {
    let arm = |key: &str, value: Option<&str>| match value {
        Some(v) => format!("  {}) echo \"{}\" ;;\n", key, v),
        None => format!("  {}) exit 1 ;;\n", key),
    };

    format!(
        "case \"$2\" in\n{}{}  *) exit 1 ;;\nesac\n",
        arm("user.name", name),
        arm("user.email", email)
    )
}

fn write_script(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).expect("write probe script");
    let mut perms = std::fs::metadata(&path).expect("stat probe script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod probe script");
}
