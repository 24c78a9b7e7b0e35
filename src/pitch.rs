//! # Pitch Classes
//!
//! The twelve pitch classes, their sharp and flat spellings, and the notation
//! preference used when a transposed root has to be written out.
//!
//! ## Spelling Table
//! ```text
//! index   0  1   2  3   4  5  6   7  8   9  10  11
//! sharps  C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! flats   C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```
//!
//! Only these 17 distinct spellings are recognized. Enharmonic edge spellings such as
//! `Cb`, `E#`, `Fb` and `B#` are not, so chords written with them pass through the
//! transposition engine untouched.
//!
//! ## Example
//! ```rust
//! use chordsheet::{Notation, PitchClass};
//!
//! let bb = PitchClass::from_spelling("Bb").unwrap();
//! assert_eq!(bb.index(), 10);
//! assert_eq!(bb.spelling(Notation::Sharps), "A#");
//! assert_eq!(bb.shift(3).spelling(Notation::Flats), "Db");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical spellings when sharps are preferred
pub const SHARP_SPELLINGS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Canonical spellings when flats are preferred
pub const FLAT_SPELLINGS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Whether transposed roots are spelled with sharps or flats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Sharps,
    Flats,
}

impl Notation {
    /// Map the UI's `useFlats` toggle onto a notation
    pub fn from_use_flats(use_flats: bool) -> Self {
        if use_flats {
            Notation::Flats
        } else {
            Notation::Sharps
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Notation::Sharps => Notation::Flats,
            Notation::Flats => Notation::Sharps,
        }
    }

    fn table(self) -> &'static [&'static str; 12] {
        match self {
            Notation::Sharps => &SHARP_SPELLINGS,
            Notation::Flats => &FLAT_SPELLINGS,
        }
    }
}

/// One of the 12 pitch classes, 0 = C through 11 = B.
///
/// Also used for song keys: a song's default key and the viewer's current key are
/// both plain pitch classes. Serialized as the sharp spelling (`"F#"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// All pitch classes in chromatic order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }

    /// Build from an index, reduced modulo 12
    pub fn from_index(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    /// Look up a root spelling in the sharp and flat tables.
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        SHARP_SPELLINGS
            .iter()
            .position(|s| *s == spelling)
            .or_else(|| FLAT_SPELLINGS.iter().position(|s| *s == spelling))
            .map(|i| PitchClass(i as u8))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn spelling(self, notation: Notation) -> &'static str {
        notation.table()[self.0 as usize]
    }

    /// Move by a signed number of semitones, wrapping into 0..12
    pub fn shift(self, semitones: i32) -> Self {
        Self::from_index(self.0 as i32 + semitones.rem_euclid(12))
    }

    /// One semitone up, B wraps to C
    pub fn step_up(self) -> Self {
        self.shift(1)
    }

    /// One semitone down, C wraps to B
    pub fn step_down(self) -> Self {
        self.shift(-1)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling(Notation::Sharps))
    }
}

impl FromStr for PitchClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_spelling(s.trim()).ok_or_else(|| format!("Unknown key: {}", s))
    }
}

impl TryFrom<String> for PitchClass {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PitchClass> for String {
    fn from(pc: PitchClass) -> Self {
        pc.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharp_and_flat_spellings_share_indices() {
        for (i, (sharp, flat)) in SHARP_SPELLINGS.iter().zip(FLAT_SPELLINGS.iter()).enumerate() {
            assert_eq!(PitchClass::from_spelling(sharp).unwrap().index() as usize, i);
            assert_eq!(PitchClass::from_spelling(flat).unwrap().index() as usize, i);
        }
    }

    #[test]
    fn test_edge_spellings_are_not_recognized() {
        for spelling in ["Cb", "E#", "Fb", "B#", "c", "H", "", "C##", "Dbb"] {
            assert_eq!(PitchClass::from_spelling(spelling), None, "{}", spelling);
        }
    }

    #[test]
    fn test_shift_wraps_both_directions() {
        let c = PitchClass::C;
        assert_eq!(c.shift(-1).index(), 11);
        assert_eq!(c.shift(13).index(), 1);
        assert_eq!(c.shift(-25).index(), 11);
        assert_eq!(PitchClass::from_index(-12), PitchClass::C);
    }

    #[test]
    fn test_step_up_and_down_wrap() {
        let b: PitchClass = "B".parse().unwrap();
        assert_eq!(b.step_up(), PitchClass::C);
        assert_eq!(PitchClass::C.step_down(), b);

        // Twelve steps is a full cycle
        let mut key = PitchClass::from_spelling("E").unwrap();
        for _ in 0..12 {
            key = key.step_up();
        }
        assert_eq!(key.to_string(), "E");
    }

    #[test]
    fn test_display_uses_sharps() {
        let eb: PitchClass = "Eb".parse().unwrap();
        assert_eq!(eb.to_string(), "D#");
        assert_eq!(eb.spelling(Notation::Flats), "Eb");
    }

    #[test]
    fn test_from_str_rejects_unknown_key() {
        let err = "X".parse::<PitchClass>().unwrap_err();
        assert_eq!(err, "Unknown key: X");
    }

    #[test]
    fn test_serde_as_sharp_spelling() {
        let gb: PitchClass = "Gb".parse().unwrap();
        let yaml = serde_yaml::to_string(&gb).unwrap();
        assert!(yaml.contains("F#"));
        assert_eq!(serde_yaml::from_str::<PitchClass>(&yaml).unwrap(), gb);

        let back: PitchClass = serde_yaml::from_str("Bb").unwrap();
        assert_eq!(back.index(), 10);
        assert!(serde_yaml::from_str::<PitchClass>("Q").is_err());
    }

    #[test]
    fn test_notation_toggle() {
        assert_eq!(Notation::from_use_flats(true), Notation::Flats);
        assert_eq!(Notation::Flats.toggled(), Notation::Sharps);
        assert_eq!(Notation::default(), Notation::Sharps);
    }
}
