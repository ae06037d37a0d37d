//! Check records and the aggregated run

use std::fmt;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckStatus {
    /// Stable lowercase name used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warn => "warn",
            CheckStatus::Fail => "fail",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one environment check.
///
/// Built once by a check predicate and never mutated afterwards; the
/// `with_*` methods consume the value and are only used while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    name: String,
    status: CheckStatus,
    detail: String,
    recommendation: Option<String>,
    details: Vec<String>,
}

impl Check {
    pub fn new(name: impl Into<String>, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            detail: detail.into(),
            recommendation: None,
            details: Vec::new(),
        }
    }

    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Pass, detail)
    }

    pub fn warn(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Warn, detail)
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Fail, detail)
    }

    /// Attach a remedy hint shown under non-passing checks
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Attach a verbose-only detail line
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.recommendation.as_deref()
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }
}

/// Ordered checks of one invocation plus the aggregate verdict.
///
/// `all_passed` is cleared by the first `Fail`; `Warn` never touches it.
#[derive(Debug, Clone)]
pub struct CheckRun {
    checks: Vec<Check>,
    passed: usize,
    warnings: usize,
    failures: usize,
    all_passed: bool,
}

impl Default for CheckRun {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckRun {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            passed: 0,
            warnings: 0,
            failures: 0,
            all_passed: true,
        }
    }

    /// Append a check and fold it into the aggregate
    pub fn record(&mut self, check: Check) {
        match check.status() {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warn => self.warnings += 1,
            CheckStatus::Fail => {
                self.failures += 1;
                self.all_passed = false;
            }
        }
        self.checks.push(check);
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// No failures and no warnings
    pub fn is_clean(&self) -> bool {
        self.all_passed && self.warnings == 0
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl FromIterator<Check> for CheckRun {
    fn from_iter<I: IntoIterator<Item = Check>>(iter: I) -> Self {
        let mut run = CheckRun::new();
        for check in iter {
            run.record(check);
        }
        run
    }
}
