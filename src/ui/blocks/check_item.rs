use taskmaster_verify::{Check, CheckStatus};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One check rendered as `<icon> <name>: <detail>`
#[derive(Debug, Clone, Copy)]
pub struct CheckItem<'a> {
    check: &'a Check,
}

impl<'a> CheckItem<'a> {
    pub fn new(check: &'a Check) -> Self {
        Self { check }
    }

    /// Verbose output adds the recommendation and probe details under the line
    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let icon = status_icon(self.check.status()).colored(supports_color, supports_unicode);

        let mut out = format!("{} {}: {}\n", icon, self.check.name(), self.check.detail());
        if !verbose {
            return out;
        }

        let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
        if let Some(rec) = self.check.recommendation() {
            out.push_str(&format!("    {} {}\n", arrow, rec));
        }
        for detail in self.check.details() {
            out.push_str(&format!(
                "    {} {}\n",
                arrow,
                ColoredText::dim(detail.as_str()).render(supports_color)
            ));
        }

        out
    }
}

pub fn status_icon(status: CheckStatus) -> Icon {
    match status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warn => Icon::Warning,
        CheckStatus::Fail => Icon::Error,
    }
}
