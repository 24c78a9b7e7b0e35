//! # Chord Transposition
//!
//! Moves chord symbols between keys.
//!
//! A chord symbol is a root spelling followed by an opaque suffix:
//!
//! ```text
//! F#m7/C#
//! ^^        root (letter A-G, optional # or b)
//!   ^^^^^   suffix (quality, extensions, slash bass) - copied verbatim
//! ```
//!
//! Only the root moves. The slash-bass part of the suffix is left as written, so
//! `G/B` up two semitones is `A/B`.
//!
//! Nothing here returns an error. Free-form annotations such as `N.C.`, `%` or
//! `(riff)` have no recognizable root and come back unchanged, which lets chord
//! sheets carry directives alongside real chords.
//!
//! ## Example
//! ```rust
//! use chordsheet::{semitone_offset, transpose, Notation, PitchClass};
//!
//! let offset = semitone_offset(PitchClass::C, "D".parse().unwrap());
//! assert_eq!(offset, 2);
//! assert_eq!(transpose("G7", offset, Notation::Sharps), "A7");
//! assert_eq!(transpose("N.C.", offset, Notation::Sharps), "N.C.");
//! ```

use crate::pitch::{Notation, PitchClass};

/// A chord symbol split into a recognized root and its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordSymbol<'a> {
    pub root: PitchClass,
    /// Root exactly as written ("Db", "C#", "E")
    pub root_text: &'a str,
    pub suffix: &'a str,
}

impl<'a> ChordSymbol<'a> {
    /// Split a chord into root and suffix.
    ///
    /// Returns `None` when the symbol does not start with a root token, or when the
    /// root token is a spelling outside the pitch table (`Cb`, `E#`, ...).
    pub fn parse(symbol: &'a str) -> Option<Self> {
        let mut chars = symbol.char_indices();

        match chars.next() {
            Some((_, 'A'..='G')) => {}
            _ => return None,
        }

        // Accidental is taken greedily: "Cb" is read as a Cb root, never as C + "b"
        let root_len = match chars.next() {
            Some((_, '#')) | Some((_, 'b')) => 2,
            _ => 1,
        };

        let (root_text, suffix) = symbol.split_at(root_len);
        let root = PitchClass::from_spelling(root_text)?;

        Some(Self {
            root,
            root_text,
            suffix,
        })
    }

    /// Render this chord with its root moved by `semitones`
    pub fn transposed(&self, semitones: i32, notation: Notation) -> String {
        let root = self.root.shift(semitones);
        format!("{}{}", root.spelling(notation), self.suffix)
    }
}

/// Transpose a chord symbol by a signed number of semitones.
///
/// Empty symbols and a zero shift are returned as-is, as is anything without a
/// recognizable root. A non-zero shift respells the root from the table for
/// `notation`.
///
/// # Examples
/// ```
/// use chordsheet::{transpose, Notation};
///
/// assert_eq!(transpose("F#m7", 1, Notation::Sharps), "Gm7");
/// assert_eq!(transpose("Bb", -1, Notation::Flats), "A");
/// assert_eq!(transpose("Ab", 3, Notation::Sharps), "B");
/// assert_eq!(transpose("G/B", 2, Notation::Sharps), "A/B");
/// ```
pub fn transpose(symbol: &str, semitones: i32, notation: Notation) -> String {
    if symbol.is_empty() || semitones == 0 {
        return symbol.to_string();
    }

    match ChordSymbol::parse(symbol) {
        Some(chord) => chord.transposed(semitones, notation),
        None => {
            log::debug!("passing through unrecognized chord {:?}", symbol);
            symbol.to_string()
        }
    }
}

/// Transpose an optional chord; an absent chord stays absent
pub fn transpose_opt(symbol: Option<&str>, semitones: i32, notation: Notation) -> Option<String> {
    symbol.map(|s| transpose(s, semitones, notation))
}

/// Semitones between a song's default key and the key it is being viewed in.
///
/// This is a plain difference of table indices in `-11..=11`. It is not reduced
/// modulo 12, so C viewed as B is `11` rather than `-1`. Both produce the same
/// transposed chords.
pub fn semitone_offset(default_key: PitchClass, current_key: PitchClass) -> i32 {
    current_key.index() as i32 - default_key.index() as i32
}
