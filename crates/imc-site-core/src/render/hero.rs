//! Hero code preview
//!
//! A plugin.yml-style block whose lines appear one by one. The delays come
//! from the typing sequence so the static page matches live playback.

use std::fmt::Write;

use crate::animation::{Sequence, TypingTiming};
use crate::format::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub key: String,
    pub value: String,
    /// Muted colour for free-text values
    pub muted: bool,
}

impl CodeLine {
    fn new(key: &str, value: &str, muted: bool) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            muted,
        }
    }

    /// Plain text form, e.g. `version: 1.4.2`
    pub fn plain(&self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}

/// Default preview lines for a vendor
pub fn default_code_lines(company: &str) -> Vec<CodeLine> {
    vec![
        CodeLine::new("name", company, false),
        CodeLine::new("version", "1.4.2", false),
        CodeLine::new("api-version", "1.20", false),
        CodeLine::new("author", company, true),
        CodeLine::new(
            "description",
            "Developing Minecraft plugins for better in-game experience",
            true,
        ),
    ]
}

pub fn typing_sequence(lines: &[CodeLine], timing: TypingTiming) -> Sequence<&CodeLine> {
    Sequence::typing(lines.iter(), timing)
}

pub fn render_code_preview(lines: &[CodeLine], timing: TypingTiming) -> String {
    let mut html = String::new();
    for (offset, line) in typing_sequence(lines, timing).schedule() {
        let value_color = if line.muted {
            "var(--text-secondary)"
        } else {
            "var(--primary-color)"
        };
        let _ = write!(
            html,
            r#"<div class="code-line" style="animation-delay: {delay}ms"><span style="color: var(--accent-blue);">{key}:</span> <span style="color: {value_color};">{value}</span></div>"#,
            delay = offset.as_millis(),
            key = escape_html(&line.key),
            value = escape_html(&line.value),
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_preview_delays() {
        let lines = default_code_lines("InternationalMC");
        let html = render_code_preview(&lines, TypingTiming::default());

        assert_eq!(html.matches(r#"class="code-line""#).count(), 5);
        assert!(html.contains("animation-delay: 50ms"));
        assert!(html.contains("animation-delay: 400ms"));
        assert!(html.contains("animation-delay: 1450ms"));
        assert!(html.contains("api-version:"));
    }

    #[test]
    fn test_plain_line() {
        let lines = default_code_lines("IMC");
        assert_eq!(lines[0].plain(), "name: IMC");
    }
}
