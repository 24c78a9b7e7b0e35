//! # Chord Sheet Rendering
//!
//! Turns stored lyric tokens into display units for a given key and set of viewer
//! preferences. Rendering reads the tokens and never changes them, so the same
//! tokens can be re-rendered on every key change or notation toggle.
//!
//! ## Example
//! ```rust
//! use chordsheet::lyrics::{tokenize, ParseOptions};
//! use chordsheet::render::{render, DisplayUnit, RenderOptions};
//! use chordsheet::ChordType;
//!
//! let tokens = tokenize("[C]Hello [G]world", ParseOptions::default(), None);
//! let units = render(&tokens, 2, &RenderOptions::default());
//!
//! assert_eq!(
//!     units[1],
//!     DisplayUnit::Chorded {
//!         word: "world".to_string(),
//!         chord: "A".to_string(),
//!         style: ChordType::Above,
//!     }
//! );
//! ```

use crate::chord::transpose;
use crate::lyrics::{ChordType, LyricToken};
use crate::pitch::Notation;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of sheet lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Viewer preferences for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub notation: Notation,
    pub show_chords: bool,
    /// Placement for tokens that do not carry their own chord type
    pub placement: ChordType,
    pub alignment: Alignment,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            notation: Notation::Sharps,
            show_chords: true,
            placement: ChordType::Above,
            alignment: Alignment::Left,
        }
    }
}

/// One renderable piece of a chord sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayUnit {
    LineBreak,
    /// A word with its chord already transposed
    Chorded {
        word: String,
        chord: String,
        style: ChordType,
    },
    /// A word shown without a chord
    Word { word: String },
}

impl DisplayUnit {
    pub fn word(&self) -> Option<&str> {
        match self {
            DisplayUnit::LineBreak => None,
            DisplayUnit::Chorded { word, .. } | DisplayUnit::Word { word } => Some(word.as_str()),
        }
    }
}

/// Render tokens shifted by `semitones`.
///
/// Tokens are taken in the order given.
pub fn render(tokens: &[LyricToken], semitones: i32, options: &RenderOptions) -> Vec<DisplayUnit> {
    tokens
        .iter()
        .map(|token| render_token(token, semitones, options))
        .collect()
}

fn render_token(token: &LyricToken, semitones: i32, options: &RenderOptions) -> DisplayUnit {
    if token.is_line_break() {
        return DisplayUnit::LineBreak;
    }

    match token.chord() {
        Some(chord) if options.show_chords => DisplayUnit::Chorded {
            word: token.word.clone(),
            chord: transpose(chord, semitones, options.notation),
            style: token.chord_type.unwrap_or(options.placement),
        },
        _ => DisplayUnit::Word {
            word: token.word.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::{tokenize, ParseOptions};

    fn tokens(raw: &str) -> Vec<LyricToken> {
        tokenize(raw, ParseOptions { keep_line_breaks: true }, None)
    }

    fn chorded(word: &str, chord: &str, style: ChordType) -> DisplayUnit {
        DisplayUnit::Chorded {
            word: word.to_string(),
            chord: chord.to_string(),
            style,
        }
    }

    #[test]
    fn test_render_in_default_key() {
        let units = render(&tokens("[C]Hello [G7]world"), 0, &RenderOptions::default());
        assert_eq!(
            units,
            vec![
                chorded("Hello", "C", ChordType::Above),
                chorded("world", "G7", ChordType::Above),
            ]
        );
    }

    #[test]
    fn test_render_transposes_every_chord() {
        let units = render(&tokens("[C]a [G]b [N.C.]c"), 2, &RenderOptions::default());
        let chords: Vec<&str> = units
            .iter()
            .map(|u| match u {
                DisplayUnit::Chorded { chord, .. } => chord.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(chords, vec!["D", "A", "N.C."]);
    }

    #[test]
    fn test_render_with_flats() {
        let options = RenderOptions {
            notation: Notation::Flats,
            ..RenderOptions::default()
        };
        let units = render(&tokens("[C]a"), 1, &options);
        assert_eq!(units, vec![chorded("a", "Db", ChordType::Above)]);
    }

    #[test]
    fn test_line_breaks_and_bare_words() {
        let units = render(&tokens("[C]one\ntwo [G]three"), 0, &RenderOptions::default());
        assert_eq!(
            units,
            vec![
                chorded("one", "C", ChordType::Above),
                DisplayUnit::LineBreak,
                DisplayUnit::Word { word: "two".to_string() },
                chorded("three", "G", ChordType::Above),
            ]
        );
    }

    #[test]
    fn test_hidden_chords_render_as_words() {
        let options = RenderOptions {
            show_chords: false,
            ..RenderOptions::default()
        };
        let units = render(&tokens("[C]one\n[G]two"), 5, &options);
        assert_eq!(
            units,
            vec![
                DisplayUnit::Word { word: "one".to_string() },
                DisplayUnit::LineBreak,
                DisplayUnit::Word { word: "two".to_string() },
            ]
        );
    }

    #[test]
    fn test_token_style_wins_over_default_placement() {
        let mut toks = tokens("[C]a [D]b");
        toks[0].chord_type = Some(ChordType::Inline);
        let options = RenderOptions {
            placement: ChordType::Above,
            ..RenderOptions::default()
        };
        let units = render(&toks, 0, &options);
        assert_eq!(units[0], chorded("a", "C", ChordType::Inline));
        assert_eq!(units[1], chorded("b", "D", ChordType::Above));
    }

    #[test]
    fn test_empty_chord_is_no_chord() {
        let mut toks = tokens("[C]a");
        toks[0].chord = Some(String::new());
        let units = render(&toks, 3, &RenderOptions::default());
        assert_eq!(units, vec![DisplayUnit::Word { word: "a".to_string() }]);
    }

    #[test]
    fn test_render_is_idempotent_and_leaves_tokens_alone() {
        let toks = tokens("[Am]one [F]two\n[C]three [G]four");
        let before = toks.clone();
        let options = RenderOptions::default();

        let first = render(&toks, -3, &options);
        let second = render(&toks, -3, &options);
        assert_eq!(first, second);
        assert_eq!(toks, before);
    }

    #[test]
    fn test_display_unit_json_shape() {
        let json = serde_json::to_string(&chorded("la", "D", ChordType::Inline)).unwrap();
        assert_eq!(json, r#"{"kind":"chorded","word":"la","chord":"D","style":"inline"}"#);

        let json = serde_json::to_string(&DisplayUnit::LineBreak).unwrap();
        assert_eq!(json, r#"{"kind":"linebreak"}"#);
    }

    #[test]
    fn test_render_options_from_partial_json() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"notation":"flats","showChords":false}"#).unwrap();
        assert_eq!(options.notation, Notation::Flats);
        assert!(!options.show_chords);
        assert_eq!(options.placement, ChordType::Above);
        assert_eq!(options.alignment, Alignment::Left);
    }
}
