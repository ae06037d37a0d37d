use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Bordered block sized to its widest line
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    content: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Add content; embedded newlines become separate rows
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.content
            .extend(line.into().lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();

        // One space of padding on each side.
        let inner_width = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0) + 2;

        let border = |s: &str| color_border(s, supports_color, self.style);
        let h = BorderChar::Horizontal.render(supports_unicode).repeat(inner_width);
        let v = border(BorderChar::Vertical.render(supports_unicode));

        let mut out = String::new();
        out.push_str(&border(&format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h,
            BorderChar::TopRight.render(supports_unicode)
        )));
        out.push('\n');

        for row in rows {
            let pad = inner_width - 1 - visible_width(row);
            out.push_str(&format!("{} {}{}{}\n", v, row, " ".repeat(pad), v));
        }

        out.push_str(&border(&format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h,
            BorderChar::BottomRight.render(supports_unicode)
        )));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: PanelStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        PanelStyle::Info => theme::colors::INFO,
        PanelStyle::Success => theme::colors::SUCCESS,
        PanelStyle::Warning => theme::colors::WARNING,
        PanelStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Drop CSI/OSC escape sequences so colored text measures correctly
fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }

    std::borrow::Cow::Owned(out)
}
