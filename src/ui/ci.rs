use taskmaster_verify::{Check, CheckStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl AnnotationLevel {
    /// Passing checks are not annotated
    pub fn for_status(status: CheckStatus) -> Option<Self> {
        match status {
            CheckStatus::Pass => None,
            CheckStatus::Warn => Some(Self::Warning),
            CheckStatus::Fail => Some(Self::Error),
        }
    }
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let prop_str = match title {
        Some(title) => format!(" title={}", escape_workflow_command_property(title)),
        None => String::new(),
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_message(message)
    )
}

/// Annotation for a warn/fail check, titled with the check name
pub fn check_annotation(check: &Check) -> Option<String> {
    let level = AnnotationLevel::for_status(check.status())?;
    let message = match check.recommendation() {
        Some(rec) => format!("{}\n{}", check.detail(), rec),
        None => check.detail().to_string(),
    };
    Some(github_actions_annotation(level, &message, Some(check.name())))
}

fn escape_workflow_command_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_workflow_command_property(s: &str) -> String {
    escape_workflow_command_message(s)
        .replace(':', "%3A")
        .replace(',', "%2C")
}
