// SPDX-License-Identifier: AGPL-3.0-or-later
//! Text widget converter: one structured element per character

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::formats::OutputFormat;
use crate::style::{FontStyle, StyleSet};
use crate::traits::{FormatConverter, Result, TextConverter};

/// A recorded widget element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetElement {
    /// A character with the style label active when it was converted
    Text { text: char, font: String },

    /// Paragraph boundary
    Paragraph,
}

impl fmt::Display for WidgetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { text, font } => write!(f, "TextWidget{{text='{}', font='{}'}}", text, font),
            Self::Paragraph => f.write_str("Paragraph"),
        }
    }
}

/// Text widget converter
#[derive(Debug, Clone, Default)]
pub struct WidgetConverter {
    elements: Vec<WidgetElement>,
    active_styles: StyleSet,
}

impl WidgetConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded elements in conversion order
    pub fn elements(&self) -> &[WidgetElement] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<WidgetElement> {
        self.elements
    }

    /// One element per line
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Elements as a pretty-printed JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.elements)?)
    }
}

impl TextConverter for WidgetConverter {
    fn convert_character(&mut self, c: char) {
        self.elements.push(WidgetElement::Text {
            text: c,
            font: self.active_styles.label(),
        });
    }

    fn convert_font_change(&mut self, font: FontStyle) {
        self.active_styles.toggle_style(font);
    }

    fn convert_paragraph(&mut self) {
        self.elements.push(WidgetElement::Paragraph);
    }
}

impl FormatConverter for WidgetConverter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Widget
    }

    fn output(&self) -> String {
        self.text()
    }

    fn reset(&mut self) {
        self.elements.clear();
        self.active_styles = StyleSet::empty();
    }
}
