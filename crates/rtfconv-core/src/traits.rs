// SPDX-License-Identifier: AGPL-3.0-or-later
//! Converter traits and the shared error type

use crate::formats::OutputFormat;
use crate::style::FontStyle;

/// Error type for everything around a conversion.
///
/// Reading itself never fails; these arise when exporting or configuring.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Receives the event stream produced by the reader.
///
/// Implementations accumulate output in their own state and must accept any
/// sequence of calls, including font toggles with no characters between them.
pub trait TextConverter {
    /// Render one character under the current style context
    fn convert_character(&mut self, c: char);

    /// Toggle `font` in the active style set
    fn convert_font_change(&mut self, font: FontStyle);

    /// Render a paragraph boundary
    fn convert_paragraph(&mut self);
}

impl<T: TextConverter + ?Sized> TextConverter for &mut T {
    fn convert_character(&mut self, c: char) {
        (**self).convert_character(c)
    }

    fn convert_font_change(&mut self, font: FontStyle) {
        (**self).convert_font_change(font)
    }

    fn convert_paragraph(&mut self) {
        (**self).convert_paragraph()
    }
}

impl<T: TextConverter + ?Sized> TextConverter for Box<T> {
    fn convert_character(&mut self, c: char) {
        (**self).convert_character(c)
    }

    fn convert_font_change(&mut self, font: FontStyle) {
        (**self).convert_font_change(font)
    }

    fn convert_paragraph(&mut self) {
        (**self).convert_paragraph()
    }
}

/// A converter whose accumulated output can be retrieved as text
pub trait FormatConverter: TextConverter + Send {
    /// The target format this converter produces
    fn format(&self) -> OutputFormat;

    /// Accumulated output rendered as a string
    fn output(&self) -> String;

    /// Clear output and active styles so the instance can serve a fresh parse
    fn reset(&mut self);
}
