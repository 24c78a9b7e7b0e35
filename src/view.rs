//! Viewer state for a displayed chord sheet.
//!
//! Holds the key the viewer has navigated to and their display preferences. The
//! song's default key is fixed, and every render derives its shift from it.

use crate::chord::semitone_offset;
use crate::lyrics::{ChordType, LyricToken};
use crate::pitch::{Notation, PitchClass};
use crate::render::{render, Alignment, DisplayUnit, RenderOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    default_key: PitchClass,
    current_key: PitchClass,
    pub notation: Notation,
    pub show_chords: bool,
    pub placement: ChordType,
    pub alignment: Alignment,
}

impl SheetView {
    pub fn new(default_key: PitchClass) -> Self {
        let defaults = RenderOptions::default();
        Self {
            default_key,
            current_key: default_key,
            notation: defaults.notation,
            show_chords: defaults.show_chords,
            placement: defaults.placement,
            alignment: defaults.alignment,
        }
    }

    pub fn default_key(&self) -> PitchClass {
        self.default_key
    }

    pub fn current_key(&self) -> PitchClass {
        self.current_key
    }

    /// Raise the current key a semitone (B wraps to C)
    pub fn key_up(&mut self) -> PitchClass {
        self.current_key = self.current_key.step_up();
        self.current_key
    }

    /// Lower the current key a semitone (C wraps to B)
    pub fn key_down(&mut self) -> PitchClass {
        self.current_key = self.current_key.step_down();
        self.current_key
    }

    pub fn set_key(&mut self, key: PitchClass) {
        self.current_key = key;
    }

    pub fn reset_key(&mut self) {
        self.current_key = self.default_key;
    }

    pub fn toggle_notation(&mut self) {
        self.notation = self.notation.toggled();
    }

    pub fn toggle_chords(&mut self) {
        self.show_chords = !self.show_chords;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Shift from the default key to the current key
    pub fn semitones(&self) -> i32 {
        semitone_offset(self.default_key, self.current_key)
    }

    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            notation: self.notation,
            show_chords: self.show_chords,
            placement: self.placement,
            alignment: self.alignment,
        }
    }

    pub fn render(&self, tokens: &[LyricToken]) -> Vec<DisplayUnit> {
        render(tokens, self.semitones(), &self.options())
    }
}
