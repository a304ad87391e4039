// SPDX-License-Identifier: AGPL-3.0-or-later
//! Font styles and the per-converter active style set

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named font style that `{font:NAME}` tokens toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Bold,
    Italic,
    Underline,
}

impl FontStyle {
    /// All styles in definition order
    pub const ALL: [Self; 3] = [Self::Bold, Self::Italic, Self::Underline];

    /// Lower-case name, as written in `{font:NAME}`
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a `{font:...}` value names no known style
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown font style: {0:?}")]
pub struct UnknownStyle(pub String);

impl FromStr for FontStyle {
    type Err = UnknownStyle;

    /// Case-sensitive: only `bold`, `italic` and `underline` are recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "underline" => Ok(Self::Underline),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

bitflags! {
    /// The set of styles currently toggled on
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleSet: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

impl From<FontStyle> for StyleSet {
    fn from(style: FontStyle) -> Self {
        match style {
            FontStyle::Bold => Self::BOLD,
            FontStyle::Italic => Self::ITALIC,
            FontStyle::Underline => Self::UNDERLINE,
        }
    }
}

impl StyleSet {
    pub fn has_style(&self, style: FontStyle) -> bool {
        self.contains(style.into())
    }

    /// Add `style` if absent, remove it if present
    pub fn toggle_style(&mut self, style: FontStyle) {
        self.toggle(style.into());
    }

    /// Active styles in definition order, independent of toggle order
    pub fn styles(&self) -> impl Iterator<Item = FontStyle> + '_ {
        FontStyle::ALL
            .into_iter()
            .filter(move |style| self.has_style(*style))
    }

    /// `"normal"` when empty, otherwise names joined with `+`
    pub fn label(&self) -> String {
        if self.is_empty() {
            return "normal".to_string();
        }
        self.styles()
            .map(|style| style.name())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
