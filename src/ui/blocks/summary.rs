use taskmaster_verify::CheckRun;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Per-status counts for a finished run
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    style: PanelStyle,
    icon: Icon,
    stats: Vec<(String, usize)>,
}

impl ResultSummary {
    pub fn from_run(run: &CheckRun) -> Self {
        let (title, style, icon) = if !run.all_passed() {
            ("Verification Failed", PanelStyle::Error, Icon::Error)
        } else if run.is_clean() {
            ("Verification Passed", PanelStyle::Success, Icon::Success)
        } else {
            ("Verification Passed With Warnings", PanelStyle::Warning, Icon::Warning)
        };

        Self {
            title: title.to_string(),
            style,
            icon,
            stats: vec![
                ("passed".to_string(), run.passed()),
                ("warnings".to_string(), run.warnings()),
                ("failed".to_string(), run.failures()),
            ],
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = match self.style {
            PanelStyle::Success => ColoredText::success(self.title.as_str()),
            PanelStyle::Warning => ColoredText::warning(self.title.as_str()),
            PanelStyle::Error => ColoredText::error(self.title.as_str()),
            PanelStyle::Info => ColoredText::info(self.title.as_str()),
        }
        .bold()
        .render(supports_color);

        let header = format!(
            "{} {}",
            self.icon.colored(supports_color, supports_unicode),
            title
        );

        let mut panel = Panel::with_title(header).style(self.style);
        panel.add_empty();
        for (label, count) in &self.stats {
            panel.add_line(format!("{} {}", count, label));
        }

        panel.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskmaster_verify::Check;

    #[test]
    fn clean_run_renders_success_title() {
        let run: CheckRun = vec![Check::pass("Git config", "Ada <ada@example.com>")]
            .into_iter()
            .collect();

        let rendered = ResultSummary::from_run(&run).render(false, false);
        assert!(rendered.contains("[OK] Verification Passed"));
        assert!(rendered.contains("| 1 passed "));
        assert!(rendered.contains("| 0 failed "));
    }

    #[test]
    fn warnings_only_run_still_passes() {
        let run: CheckRun = vec![
            Check::pass("Node.js version", "v20.11.0"),
            Check::warn("npm version", "8.19.4 (recommend 9+)"),
        ]
        .into_iter()
        .collect();

        let rendered = ResultSummary::from_run(&run).render(false, false);
        assert!(rendered.contains("[WARN] Verification Passed With Warnings"));
        assert!(rendered.contains("| 1 warnings "));
    }

    #[test]
    fn any_failure_renders_failed_title() {
        let run: CheckRun = vec![
            Check::warn("npm version", "8.19.4 (recommend 9+)"),
            Check::fail("Required files", "Missing: README.md"),
        ]
        .into_iter()
        .collect();

        let rendered = ResultSummary::from_run(&run).render(false, false);
        assert!(rendered.contains("[FAIL] Verification Failed"));
    }
}
