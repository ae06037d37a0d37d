use std::path::Path;

use taskmaster_verify::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

/// Unknown config keys, printed to stderr before any check runs
pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], supports_unicode: bool) {
    let icon = Icon::Warning.render(supports_unicode);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!(
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                path.display(),
                line
            );
        } else {
            eprintln!(
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                path.display()
            );
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
