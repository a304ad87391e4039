// SPDX-License-Identifier: AGPL-3.0-or-later
//! Property tests for reader ordering, toggling and leniency

use proptest::prelude::*;
use rtfconv_core::{
    AsciiConverter, FontStyle, RtfReader, StyleSet, TexConverter, TextConverter,
    WidgetConverter,
};

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Char(char),
    Font(FontStyle),
    Par,
}

impl Piece {
    fn markup(&self) -> String {
        match self {
            Piece::Char(c) => format!("{{char:{}}}", c),
            Piece::Font(style) => format!("{{font:{}}}", style.name()),
            Piece::Par => "{par}".to_string(),
        }
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<Piece>,
}

impl TextConverter for Recorder {
    fn convert_character(&mut self, c: char) {
        self.events.push(Piece::Char(c));
    }

    fn convert_font_change(&mut self, font: FontStyle) {
        self.events.push(Piece::Font(font));
    }

    fn convert_paragraph(&mut self) {
        self.events.push(Piece::Par);
    }
}

fn style() -> impl Strategy<Value = FontStyle> {
    prop_oneof![
        Just(FontStyle::Bold),
        Just(FontStyle::Italic),
        Just(FontStyle::Underline),
    ]
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        any::<char>().prop_filter("} ends a token", |c| *c != '}').prop_map(Piece::Char),
        style().prop_map(Piece::Font),
        Just(Piece::Par),
    ]
}

fn markup(pieces: &[Piece]) -> String {
    pieces.iter().map(Piece::markup).collect()
}

fn tex(input: &str) -> String {
    let mut converter = TexConverter::new();
    RtfReader::new(&mut converter).parse_rtf(input);
    converter.text().to_string()
}

proptest! {
    #[test]
    fn dispatch_preserves_token_order(pieces in prop::collection::vec(piece(), 0..40)) {
        let mut recorder = Recorder::default();
        let report = RtfReader::new(&mut recorder).parse_rtf(&markup(&pieces));
        prop_assert_eq!(&recorder.events, &pieces);
        prop_assert!(report.is_clean());
    }

    #[test]
    fn ascii_output_ignores_font_tokens(pieces in prop::collection::vec(piece(), 0..40)) {
        let unstyled: Vec<Piece> = pieces
            .iter()
            .filter(|p| !matches!(p, Piece::Font(_)))
            .cloned()
            .collect();

        let mut styled_out = AsciiConverter::new();
        RtfReader::new(&mut styled_out).parse_rtf(&markup(&pieces));
        let mut plain_out = AsciiConverter::new();
        RtfReader::new(&mut plain_out).parse_rtf(&markup(&unstyled));

        prop_assert_eq!(styled_out.text(), plain_out.text());
    }

    #[test]
    fn double_toggle_is_identity(bits in 0u8..8, style in style()) {
        let mut set = StyleSet::from_bits_truncate(bits);
        let before = set;
        set.toggle_style(style);
        set.toggle_style(style);
        prop_assert_eq!(set, before);
    }

    #[test]
    fn double_toggle_leaves_tex_output_unchanged(
        prefix in prop::collection::vec(piece(), 0..20),
        suffix in prop::collection::vec(piece(), 0..20),
        style in style(),
    ) {
        let toggle = Piece::Font(style).markup();
        let with_toggles = format!("{}{}{}{}", markup(&prefix), toggle, toggle, markup(&suffix));
        let without = format!("{}{}", markup(&prefix), markup(&suffix));
        prop_assert_eq!(tex(&with_toggles), tex(&without));
    }

    #[test]
    fn garbage_never_stops_later_tokens(garbage in "\\PC*") {
        let input = format!("{}}}{{char:Z}}", garbage);

        let mut recorder = Recorder::default();
        let report = RtfReader::new(&mut recorder).parse_rtf(&input);
        prop_assert_eq!(recorder.events.last(), Some(&Piece::Char('Z')));
        prop_assert!(report.is_clean());

        let mut widget = WidgetConverter::new();
        RtfReader::new(&mut widget).parse_rtf(&input);
        prop_assert!(!widget.elements().is_empty());
    }
}
