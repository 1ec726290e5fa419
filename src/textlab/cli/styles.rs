//! Styles for the textlab CLI.
//!
//! Templates never name colors. They refer to semantic style names (a match, a label, a
//! warning) through the `style` filter, and this module maps those names onto
//! `console::Style` values. Changing the look of the CLI means editing `build_theme`,
//! not the templates.
//!
//! Whether styles produce ANSI codes at all is decided once per process by the caller
//! (`--no-color`, or stdout not being a color terminal). In plain mode the theme still
//! checks names, so a typo in a template shows up as `(!?)` instead of silently
//! rendering unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style that does not exist.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const PLAIN: &str = "plain";
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const MATCH: &str = "match";
    pub const PENDING: &str = "pending";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const HELP_SECTION: &str = "help-section";
    pub const HELP_COMMAND: &str = "help-command";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies the named style. Colors are forced on or off by `use_color` rather
    /// than left to console's own terminal detection.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static TEXTLAB_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let muted = Style::new().color256(245);
    let accent = Style::new().color256(214);

    Theme::new()
        .add(names::PLAIN, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::LABEL, accent.clone())
        .add(names::VALUE, Style::new().bold())
        .add(names::MATCH, Style::new().black().on_color256(220))
        .add(names::PENDING, Style::new().cyan())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
        .add(names::HELP_SECTION, accent.bold())
        .add(names::HELP_COMMAND, Style::new().green())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text_unchanged() {
        assert_eq!(TEXTLAB_THEME.apply(names::MATCH, "fox", false), "fox");
    }

    #[test]
    fn color_mode_emits_ansi_codes() {
        let styled = TEXTLAB_THEME.apply(names::ERROR, "boom", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("boom"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        let out = TEXTLAB_THEME.apply("no-such-style", "text", false);
        assert_eq!(out, "(!?) text");
    }
}
