// SPDX-License-Identifier: AGPL-3.0-or-later
//! Output format identifiers and the one-shot `convert` helper

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::converters::{AsciiConverter, TexConverter, WidgetConverter};
use crate::reader::{ParseReport, ReadConfig, RtfReader};
use crate::traits::{ConversionError, FormatConverter};

/// Target format of a converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Ascii,
    Tex,
    Widget,
}

impl OutputFormat {
    /// File extension for this format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Ascii => "txt",
            Self::Tex => "tex",
            Self::Widget => "widget",
        }
    }

    /// Heading used when printing converted output
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ascii => "ASCII",
            Self::Tex => "TeX",
            Self::Widget => "Text Widget",
        }
    }

    /// All formats in display order
    pub const ALL: [Self; 3] = [Self::Ascii, Self::Tex, Self::Widget];

    /// A fresh converter for this format
    pub fn converter(&self) -> Box<dyn FormatConverter> {
        match self {
            Self::Ascii => Box::new(AsciiConverter::new()),
            Self::Tex => Box::new(TexConverter::new()),
            Self::Widget => Box::new(WidgetConverter::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" | "txt" => Ok(Self::Ascii),
            "tex" | "latex" => Ok(Self::Tex),
            "widget" => Ok(Self::Widget),
            _ => Err(ConversionError::UnknownFormat(s.to_string())),
        }
    }
}

/// Output of a single create-parse-retrieve run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub format: OutputFormat,
    pub output: String,
    pub report: ParseReport,
}

/// Convert `input` to `format` with a new converter
pub fn convert(input: &str, format: OutputFormat) -> Conversion {
    convert_with(input, format, &ReadConfig::default())
}

pub fn convert_with(input: &str, format: OutputFormat, config: &ReadConfig) -> Conversion {
    let mut reader = RtfReader::with_config(format.converter(), config.clone());
    let report = reader.parse_rtf(input);

    Conversion {
        format,
        output: reader.converter().output(),
        report,
    }
}
