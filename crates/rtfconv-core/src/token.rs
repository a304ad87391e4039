// SPDX-License-Identifier: AGPL-3.0-or-later
//! Token scanner for the bracketed markup grammar
//!
//! ```text
//! TOKEN := "{" KIND [":" VALUE] "}"
//! KIND  := "char" | "font" | "par"
//! VALUE := any run of characters excluding "}"
//! ```
//!
//! Matches are leftmost and non-overlapping. `par` never takes a value, so
//! `{par:x}` is not a token. Near-matches are stepped over one byte at a time,
//! which lets a later `{` inside them still open a token.

use serde::{Deserialize, Serialize};

/// Byte range of a token or gap in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Character,
    FontChange,
    Paragraph,
}

const KEYWORDS: [(&str, TokenKind); 3] = [
    ("char", TokenKind::Character),
    ("font", TokenKind::FontChange),
    ("par", TokenKind::Paragraph),
];

/// A matched token, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Raw text after the `:`, possibly empty. `None` when there was no `:`.
    pub value: Option<&'a str>,
    pub span: Span,
}

/// Iterator over the tokens of an input string
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

/// Scan `input` for tokens, left to right
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner { input, pos: 0 }
}

impl<'a> Scanner<'a> {
    /// Match a token opening at `open`.
    ///
    /// The keyword is checked before any search for `}`, so a failed match
    /// costs constant time.
    fn match_at(&mut self, open: usize) -> Option<Token<'a>> {
        let body = &self.input[open + 1..];
        let (kind, after) = KEYWORDS
            .into_iter()
            .find_map(|(keyword, kind)| body.strip_prefix(keyword).map(|after| (kind, after)))?;
        let keyword_end = self.input.len() - after.len();

        match after.as_bytes().first()? {
            b'}' => Some(Token {
                kind,
                value: None,
                span: Span::new(open, keyword_end + 1),
            }),
            b':' if kind != TokenKind::Paragraph => {
                let value = &after[1..];
                // Without a closing brace nothing further can match.
                let Some(close) = value.find('}') else {
                    self.pos = self.input.len();
                    return None;
                };
                Some(Token {
                    kind,
                    value: Some(&value[..close]),
                    span: Span::new(open, keyword_end + 1 + close + 1),
                })
            }
            _ => None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let open = self.pos + self.input[self.pos..].find('{')?;
            self.pos = open + 1;
            if let Some(token) = self.match_at(open) {
                self.pos = token.span.end;
                return Some(token);
            }
        }
        None
    }
}
