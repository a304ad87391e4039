// SPDX-License-Identifier: AGPL-3.0-or-later
//! TeX markup converter
//!
//! Characters are escaped, then wrapped in style commands chosen by a fixed
//! precedence that ignores toggle order:
//!
//! | active styles           | wrapper                 |
//! |-------------------------|-------------------------|
//! | bold and italic         | `\textbf{\textit{...}}` |
//! | bold                    | `\textbf{...}`          |
//! | italic                  | `\textit{...}`          |
//! | underline only          | `\underline{...}`       |
//!
//! Underline is dropped whenever bold or italic is also active.

use std::borrow::Cow;

use crate::formats::OutputFormat;
use crate::style::{FontStyle, StyleSet};
use crate::traits::{FormatConverter, TextConverter};

/// TeX markup converter
#[derive(Debug, Clone, Default)]
pub struct TexConverter {
    result: String,
    active_styles: StyleSet,
}

impl TexConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.result
    }

    pub fn active_styles(&self) -> StyleSet {
        self.active_styles
    }

    /// Opening and closing markup for the current style set
    fn wrapper(&self) -> Option<(&'static str, &'static str)> {
        let styles = self.active_styles;
        if styles.contains(StyleSet::BOLD | StyleSet::ITALIC) {
            Some(("\\textbf{\\textit{", "}}"))
        } else if styles.contains(StyleSet::BOLD) {
            Some(("\\textbf{", "}"))
        } else if styles.contains(StyleSet::ITALIC) {
            Some(("\\textit{", "}"))
        } else if styles.contains(StyleSet::UNDERLINE) {
            Some(("\\underline{", "}"))
        } else {
            None
        }
    }
}

/// Escape a TeX special character by prefixing a backslash
pub fn escape(c: char) -> Cow<'static, str> {
    match c {
        '&' => Cow::Borrowed("\\&"),
        '%' => Cow::Borrowed("\\%"),
        '$' => Cow::Borrowed("\\$"),
        '#' => Cow::Borrowed("\\#"),
        '_' => Cow::Borrowed("\\_"),
        '{' => Cow::Borrowed("\\{"),
        '}' => Cow::Borrowed("\\}"),
        other => Cow::Owned(other.to_string()),
    }
}

impl TextConverter for TexConverter {
    fn convert_character(&mut self, c: char) {
        let escaped = escape(c);
        match self.wrapper() {
            Some((open, close)) => {
                self.result.push_str(open);
                self.result.push_str(&escaped);
                self.result.push_str(close);
            }
            None => self.result.push_str(&escaped),
        }
    }

    fn convert_font_change(&mut self, font: FontStyle) {
        self.active_styles.toggle_style(font);
    }

    fn convert_paragraph(&mut self) {
        self.result.push_str("\n\n");
    }
}

impl FormatConverter for TexConverter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Tex
    }

    fn output(&self) -> String {
        self.result.clone()
    }

    fn reset(&mut self) {
        self.result.clear();
        self.active_styles = StyleSet::empty();
    }
}
