//! Check predicates
//!
//! Each predicate turns one or more probe answers into exactly one `Check`.
//! Probe errors are absorbed here and never propagate to the runner.

use std::path::Path;

use crate::domain::check::Check;
use crate::domain::ports::{IdentityProbe, PathProbe, VersionProbe};

pub const RUNTIME_CHECK: &str = "Node.js version";
pub const PACKAGE_MANAGER_CHECK: &str = "npm version";
pub const IDENTITY_CHECK: &str = "Git config";
pub const DEPENDENCIES_CHECK: &str = "Dependencies";
pub const REQUIRED_FILES_CHECK: &str = "Required files";

/// Lowest Node.js major that passes
pub const RUNTIME_MIN_MAJOR: u32 = 18;
/// npm majors below this warn
pub const PACKAGE_MANAGER_MIN_MAJOR: u32 = 9;
/// Created by `npm install`
pub const DEPENDENCY_DIR: &str = "node_modules";
/// Failure detail when the dependency directory is missing
pub const INSTALL_HINT: &str = "Run npm install";
/// Files that must exist at the project root, reported in this order
pub const REQUIRED_FILES: [&str; 2] = ["package.json", "README.md"];

/// The fixed, ordered set of checks in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Runtime,
    PackageManager,
    Identity,
    Dependencies,
    RequiredFiles,
}

impl CheckKind {
    /// Run order; output order follows it.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Runtime,
        CheckKind::PackageManager,
        CheckKind::Identity,
        CheckKind::Dependencies,
        CheckKind::RequiredFiles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Runtime => RUNTIME_CHECK,
            CheckKind::PackageManager => PACKAGE_MANAGER_CHECK,
            CheckKind::Identity => IDENTITY_CHECK,
            CheckKind::Dependencies => DEPENDENCIES_CHECK,
            CheckKind::RequiredFiles => REQUIRED_FILES_CHECK,
        }
    }
}

/// Major version of a version string like `v20.11.0` or `10.2.4`.
///
/// Leading digits of the first dot-separated component are used, so
/// `21-nightly.1` yields 21. Returns `None` when there are no digits.
pub fn parse_major(version: &str) -> Option<u32> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let first = version.split('.').next()?;
    let digits: String = first.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

pub fn check_runtime(probe: &dyn VersionProbe) -> Check {
    let min_major = RUNTIME_MIN_MAJOR;
    let recommendation = format!("Install Node.js {} or newer", min_major);

    let check = match probe.version() {
        Ok(version) => match parse_major(&version) {
            Some(major) if major >= min_major => Check::pass(RUNTIME_CHECK, version),
            _ => Check::fail(RUNTIME_CHECK, format!("{} (need {}+)", version, min_major))
                .with_recommendation(recommendation),
        },
        Err(err) => Check::fail(RUNTIME_CHECK, "Not found")
            .with_recommendation(recommendation)
            .with_detail(err.to_string()),
    };

    check.with_detail(format!("probe: {}", probe.describe()))
}

/// An old package manager only warns; a missing one fails.
pub fn check_package_manager(probe: &dyn VersionProbe) -> Check {
    let min_major = PACKAGE_MANAGER_MIN_MAJOR;
    let check = match probe.version() {
        Ok(version) => match parse_major(&version) {
            Some(major) if major >= min_major => Check::pass(PACKAGE_MANAGER_CHECK, version),
            _ => Check::warn(
                PACKAGE_MANAGER_CHECK,
                format!("{} (recommend {}+)", version, min_major),
            )
            .with_recommendation("Upgrade with `npm install -g npm@latest`"),
        },
        Err(err) => Check::fail(PACKAGE_MANAGER_CHECK, "Not found")
            .with_recommendation("Install npm (it ships with Node.js)")
            .with_detail(err.to_string()),
    };

    check.with_detail(format!("probe: {}", probe.describe()))
}

pub fn check_identity(probe: &dyn IdentityProbe) -> Check {
    const RECOMMENDATION: &str = concat!(
        "Run `git config --global user.name \"Your Name\"` and ",
        "`git config --global user.email you@example.com`"
    );

    let check = match probe.identity() {
        Ok(identity) if identity.is_complete() => Check::pass(
            IDENTITY_CHECK,
            format!("{} <{}>", identity.name, identity.email),
        ),
        Ok(_) => Check::fail(IDENTITY_CHECK, "Name or email not set")
            .with_recommendation(RECOMMENDATION),
        Err(err) => Check::fail(IDENTITY_CHECK, "Git not configured")
            .with_recommendation(RECOMMENDATION)
            .with_detail(err.to_string()),
    };

    check.with_detail(format!("probe: {}", probe.describe()))
}

pub fn check_dependencies(paths: &dyn PathProbe) -> Check {
    let relative = Path::new(DEPENDENCY_DIR);
    let checked = format!("checked: {}", paths.resolve(relative).display());

    if paths.exists(relative) {
        Check::pass(DEPENDENCIES_CHECK, format!("{} exists", DEPENDENCY_DIR)).with_detail(checked)
    } else {
        Check::fail(DEPENDENCIES_CHECK, INSTALL_HINT).with_detail(checked)
    }
}

/// The failure detail lists exactly the missing files, in `REQUIRED_FILES` order.
pub fn check_required_files(paths: &dyn PathProbe) -> Check {
    let missing: Vec<&str> = REQUIRED_FILES
        .into_iter()
        .filter(|f| !paths.exists(Path::new(f)))
        .collect();

    let checked = format!("root: {}", paths.root().display());

    if missing.is_empty() {
        Check::pass(REQUIRED_FILES_CHECK, "All present").with_detail(checked)
    } else {
        Check::fail(REQUIRED_FILES_CHECK, format!("Missing: {}", missing.join(", ")))
            .with_recommendation("Create the missing files at the project root")
            .with_detail(checked)
    }
}
