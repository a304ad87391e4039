// SPDX-License-Identifier: AGPL-3.0-or-later
//! Plain text converter

use crate::formats::OutputFormat;
use crate::style::FontStyle;
use crate::traits::{FormatConverter, TextConverter};

/// Plain text converter. Font changes have no effect on its output.
#[derive(Debug, Clone, Default)]
pub struct AsciiConverter {
    result: String,
}

impl AsciiConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.result
    }
}

impl TextConverter for AsciiConverter {
    fn convert_character(&mut self, c: char) {
        self.result.push(c);
    }

    fn convert_font_change(&mut self, _font: FontStyle) {}

    fn convert_paragraph(&mut self) {
        self.result.push('\n');
    }
}

impl FormatConverter for AsciiConverter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Ascii
    }

    fn output(&self) -> String {
        self.result.clone()
    }

    fn reset(&mut self) {
        self.result.clear();
    }
}
