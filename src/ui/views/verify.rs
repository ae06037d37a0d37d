use std::path::Path;

use taskmaster_verify::{Check, CheckRun, VerificationToken};

use crate::ui::blocks::check_item::CheckItem;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::border::rule;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const TITLE: &str = "TaskMaster Environment Verification";
pub const FAILURE_NOTICE: &str = "Some checks failed. Please fix the issues above and try again.";

/// Banner, rule and the `Results:` label that precede the check lines
pub fn render_verify_header(
    project_root: &Path,
    config_source: Option<&Path>,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, TITLE);
    if verbose > 0 {
        header.add("Project", project_root.display().to_string());
        header.add(
            "Config",
            config_source
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string()),
        );
    }

    format!(
        "\n{}\n{}\n\nResults:\n\n",
        header.render(supports_color, supports_unicode),
        rule()
    )
}

pub fn render_check_line(
    check: &Check,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    CheckItem::new(check).render(verbose > 0, supports_color, supports_unicode)
}

/// Closing rule, plus the count panel when verbose
pub fn render_results_footer(
    run: &CheckRun,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!("\n{}\n", rule());
    if verbose > 0 {
        out.push('\n');
        out.push_str(&ResultSummary::from_run(run).render(supports_color, supports_unicode));
    }
    out
}

pub fn render_success_block(
    token: &VerificationToken,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = ColoredText::success("All checks passed!")
        .bold()
        .render(supports_color);
    let shown = ColoredText::info(token.as_str()).bold().render(supports_color);

    let mut out = String::new();
    out.push_str(&format!(
        "\n{} {}\n\n",
        Icon::Celebrate.colored(supports_color, supports_unicode),
        title
    ));
    out.push_str("Your verification token:\n");
    out.push_str(&format!("\n  {}\n\n", shown));
    out.push_str("Submit this token to complete Task 1.1\n");
    out.push_str(&format!("- Discord: /submit {}\n", token));
    out.push_str("- Web Portal: Tasks > Task 1.1 > Submit Token\n");
    out
}

pub fn render_failure_notice(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "\n{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(FAILURE_NOTICE).render(supports_color)
    )
}
