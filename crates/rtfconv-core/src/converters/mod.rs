// SPDX-License-Identifier: AGPL-3.0-or-later
//! Converters for each supported output format

pub mod ascii;
pub mod tex;
pub mod widget;

pub use ascii::AsciiConverter;
pub use tex::TexConverter;
pub use widget::{WidgetConverter, WidgetElement};
