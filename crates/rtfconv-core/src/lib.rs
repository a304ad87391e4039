// SPDX-License-Identifier: AGPL-3.0-or-later
//! rtfconv core - bracketed-token reader and pluggable text converters
//!
//! This crate provides:
//! - A scanner for the `{char:X}` / `{font:NAME}` / `{par}` token grammar
//! - A lenient reader that drives any [`TextConverter`] with those tokens
//! - Converters for three targets: plain ASCII, TeX markup and text widgets
//!
//! ```
//! use rtfconv_core::{AsciiConverter, RtfReader};
//!
//! let mut converter = AsciiConverter::new();
//! RtfReader::new(&mut converter).parse_rtf("{char:H}{char:i}{par}");
//! assert_eq!(converter.text(), "Hi\n");
//! ```

pub mod converters;
pub mod formats;
pub mod reader;
pub mod style;
pub mod token;
pub mod traits;

pub use converters::{AsciiConverter, TexConverter, WidgetConverter, WidgetElement};
pub use formats::{convert, convert_with, Conversion, OutputFormat};
pub use reader::{Diagnostic, ParseReport, ReadConfig, RtfReader};
pub use style::{FontStyle, StyleSet, UnknownStyle};
pub use token::{scan, Span, Token, TokenKind};
pub use traits::{ConversionError, FormatConverter, Result, TextConverter};
