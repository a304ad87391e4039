// SPDX-License-Identifier: AGPL-3.0-or-later
//! The reader: scans input and drives a converter, token by token
//!
//! Reading is lenient. Unusable `char` values and unknown font names are
//! skipped without comment, and text the grammar does not cover is never an
//! error. Only an unparsed tail produces a diagnostic, and that diagnostic is
//! advisory: it is logged as a warning and returned in the [`ParseReport`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

use crate::style::FontStyle;
use crate::token::{scan, Span, Token, TokenKind};
use crate::traits::TextConverter;

/// Configuration for reading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Record spans of unmatched text between tokens in the report
    pub collect_gaps: bool,
}

/// Advisory, non-fatal report about the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Input after the last matched token that was not converted
    UnparsedRemainder { offset: usize, text: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparsedRemainder { text, .. } => {
                write!(f, "Unparsed input remains: {}", text)
            }
        }
    }
}

/// Summary of one `parse_rtf` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Tokens matched by the scanner
    pub tokens: usize,
    pub characters: usize,
    pub font_changes: usize,
    pub paragraphs: usize,
    /// Matched tokens whose value was unusable
    pub skipped: usize,
    /// Unmatched text between tokens, when [`ReadConfig::collect_gaps`] is set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<Span>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl ParseReport {
    /// True when the whole input up to its end was covered by tokens
    pub fn is_clean(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostic.iter()
    }
}

/// Drives one converter with the tokens found in the input.
///
/// The converter is injected at construction and held for the reader's whole
/// lifetime. Pass `&mut converter` to keep ownership on the caller's side.
pub struct RtfReader<C> {
    builder: C,
    config: ReadConfig,
}

impl<C: TextConverter> RtfReader<C> {
    pub fn new(builder: C) -> Self {
        Self::with_config(builder, ReadConfig::default())
    }

    pub fn with_config(builder: C, config: ReadConfig) -> Self {
        Self { builder, config }
    }

    pub fn config(&self) -> &ReadConfig {
        &self.config
    }

    pub fn converter(&self) -> &C {
        &self.builder
    }

    pub fn converter_mut(&mut self) -> &mut C {
        &mut self.builder
    }

    pub fn into_inner(self) -> C {
        self.builder
    }

    /// Scan `input` and dispatch every token to the converter in order
    pub fn parse_rtf(&mut self, input: &str) -> ParseReport {
        let mut report = ParseReport::default();
        let mut last_index = 0;

        for token in scan(input) {
            if token.span.start > last_index {
                let gap = Span::new(last_index, token.span.start);
                debug!(
                    offset = gap.start,
                    text = &input[gap.start..gap.end],
                    "skipping text between tokens"
                );
                if self.config.collect_gaps {
                    report.gaps.push(gap);
                }
            }

            report.tokens += 1;
            self.dispatch(&token, &mut report);
            last_index = token.span.end;
        }

        if last_index < input.len() {
            let text = &input[last_index..];
            warn!(offset = last_index, "Unparsed input remains: {}", text);
            report.diagnostic = Some(Diagnostic::UnparsedRemainder {
                offset: last_index,
                text: text.to_string(),
            });
        }

        report
    }

    fn dispatch(&mut self, token: &Token<'_>, report: &mut ParseReport) {
        match token.kind {
            TokenKind::Character => match single_char(token.value) {
                Some(c) => {
                    self.builder.convert_character(c);
                    report.characters += 1;
                }
                None => {
                    trace!(value = ?token.value, "ignoring char token without a single character");
                    report.skipped += 1;
                }
            },

            TokenKind::FontChange => match token.value.map(str::parse::<FontStyle>) {
                Some(Ok(style)) => {
                    self.builder.convert_font_change(style);
                    report.font_changes += 1;
                }
                _ => {
                    trace!(value = ?token.value, "ignoring unknown font style");
                    report.skipped += 1;
                }
            },

            TokenKind::Paragraph => {
                self.builder.convert_paragraph();
                report.paragraphs += 1;
            }
        }
    }
}

fn single_char(value: Option<&str>) -> Option<char> {
    let mut chars = value?.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
