use serde::Serialize;

use taskmaster_verify::{Check, VerifyOutcome};

const COMMAND: &str = "verify";

#[derive(Debug, Clone, Serialize)]
pub struct StartEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub version: &'static str,
}

impl StartEvent {
    pub fn new() -> Self {
        Self {
            event: "start",
            command: COMMAND,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One finished check
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub name: &'a str,
    pub status: &'static str,
    pub detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub details: &'a [String],
}

impl<'a> CheckEvent<'a> {
    pub fn new(check: &'a Check) -> Self {
        Self {
            event: "check",
            command: COMMAND,
            name: check.name(),
            status: check.status().as_str(),
            detail: check.detail(),
            recommendation: check.recommendation(),
            details: check.details(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub success: bool,
    pub passes: usize,
    pub warnings: usize,
    pub failures: usize,
    pub all_passed: bool,
    /// Present only when every check passed
    pub token: Option<&'a str>,
}

impl<'a> CompleteEvent<'a> {
    pub fn from_outcome(outcome: &'a VerifyOutcome) -> Self {
        Self {
            event: "complete",
            command: COMMAND,
            success: outcome.is_success(),
            passes: outcome.run.passed(),
            warnings: outcome.run.warnings(),
            failures: outcome.run.failures(),
            all_passed: outcome.run.all_passed(),
            token: outcome.token.as_ref().map(|t| t.as_str()),
        }
    }
}

/// Emitted instead of any check events when the run cannot start
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command: COMMAND,
            code,
            message: message.into(),
        }
    }
}
