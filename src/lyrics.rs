//! # Lyrics
//!
//! The stored form of a song's lyrics and the parser that produces it from
//! authored text.
//!
//! ## Annotated Text
//! Authors write chords in square brackets directly before the words they apply to:
//!
//! ```text
//! [C]Hello [G7]world
//! ```
//!
//! Each annotation owns the text up to the next `[` (or the end of input), trimmed.
//!
//! ## Scanner States
//! ```text
//!            '['                 ']'
//! Outside ─────────▶ Annotation ─────────▶ Outside (collecting word)
//!    │                   │
//!    └ text before the   └ end of input: annotation is unclosed,
//!      first '[' is        its content is dropped
//!      dropped
//! ```
//!
//! The parser never fails. Text it cannot attach to a chord is dropped rather
//! than reported.
//!
//! ## Example
//! ```rust
//! use chordsheet::lyrics::{parse_lyrics, number_tokens};
//!
//! let pairs = parse_lyrics("[Am]one [F]two [C]three [G]four");
//! let tokens = number_tokens(pairs, None);
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[2].word, "three");
//! assert_eq!(tokens[2].word_order, 2);
//! ```

use serde::{Deserialize, Serialize};

/// Word value that marks a line break in a token list
pub const LINE_BREAK: &str = "\n";

/// How a chord is placed relative to its word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordType {
    /// `[D]word` on the same line
    Inline,
    /// On a chord line over the word
    #[default]
    Above,
}

/// One (word, chord) pair at a fixed position in a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricToken {
    /// Zero-based display position, unique within a song
    pub word_order: usize,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord_type: Option<ChordType>,
}

impl LyricToken {
    pub fn line_break(word_order: usize) -> Self {
        Self {
            word_order,
            word: LINE_BREAK.to_string(),
            chord: None,
            chord_type: None,
        }
    }

    pub fn is_line_break(&self) -> bool {
        self.word == LINE_BREAK
    }

    /// The chord, treating an empty string as no chord
    pub fn chord(&self) -> Option<&str> {
        self.chord.as_deref().filter(|c| !c.is_empty())
    }
}

/// Parser output: chord text as authored plus its trimmed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricPair {
    pub chord: String,
    pub word: String,
}

impl LyricPair {
    fn new(chord: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            chord: chord.into(),
            word: word.into(),
        }
    }
}

/// Parser switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Split word spans at newlines and emit [`LINE_BREAK`] pairs between the pieces.
    /// When off, newlines are trimmed away like any other whitespace.
    pub keep_line_breaks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// Before the first annotation, or collecting the word after one
    Outside,
    /// Between `[` and `]`
    Annotation,
}

/// Scanner over annotated lyric text
struct LyricsScanner<'a> {
    input: &'a str,
    options: ParseOptions,
    state: State,
    /// Chord of the word currently being collected; `None` before the first annotation
    chord: Option<&'a str>,
    /// Byte offset where the current annotation or word span starts
    span_start: usize,
    pairs: Vec<LyricPair>,
}

impl<'a> LyricsScanner<'a> {
    fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            options,
            state: State::Outside,
            chord: None,
            span_start: 0,
            pairs: Vec::new(),
        }
    }

    fn scan(mut self) -> Vec<LyricPair> {
        let input = self.input;
        for (pos, c) in input.char_indices() {
            match (self.state, c) {
                (State::Outside, '[') => {
                    self.finish_word(pos);
                    self.state = State::Annotation;
                    self.span_start = pos + 1;
                }
                (State::Annotation, ']') => {
                    let text = &input[self.span_start..pos];
                    // "[]" is not an annotation; its trailing text has no owner
                    self.chord = if text.is_empty() { None } else { Some(text) };
                    self.state = State::Outside;
                    self.span_start = pos + 1;
                }
                _ => {}
            }
        }

        match self.state {
            State::Outside => self.finish_word(input.len()),
            State::Annotation => {
                log::debug!(
                    "dropping unclosed chord annotation at byte {}",
                    self.span_start.saturating_sub(1)
                );
            }
        }

        self.pairs
    }

    /// Close the word span ending at `end` and attach it to the pending chord
    fn finish_word(&mut self, end: usize) {
        let input = self.input;
        let span = &input[self.span_start..end];

        let Some(chord) = self.chord.take() else {
            if !span.trim().is_empty() {
                log::debug!("dropping text without a chord annotation: {:?}", span.trim());
            }
            return;
        };

        if !self.options.keep_line_breaks {
            self.pairs.push(LyricPair::new(chord, span.trim()));
            return;
        }

        let mut lines = span.split('\n');
        if let Some(first) = lines.next() {
            self.pairs.push(LyricPair::new(chord, first.trim()));
        }
        for line in lines {
            self.pairs.push(LyricPair::new("", LINE_BREAK));
            let word = line.trim();
            if !word.is_empty() {
                self.pairs.push(LyricPair::new("", word));
            }
        }
    }
}

/// Parse annotated lyric text into chord/word pairs in scan order.
///
/// # Example
/// ```
/// use chordsheet::lyrics::parse_lyrics;
///
/// let pairs = parse_lyrics("[C]Hello [G7]world");
/// assert_eq!(pairs.len(), 2);
/// assert_eq!((pairs[0].chord.as_str(), pairs[0].word.as_str()), ("C", "Hello"));
/// assert_eq!((pairs[1].chord.as_str(), pairs[1].word.as_str()), ("G7", "world"));
/// ```
pub fn parse_lyrics(raw: &str) -> Vec<LyricPair> {
    parse_lyrics_with(raw, ParseOptions::default())
}

/// Parse annotated lyric text with explicit [`ParseOptions`]
pub fn parse_lyrics_with(raw: &str, options: ParseOptions) -> Vec<LyricPair> {
    LyricsScanner::new(raw, options).scan()
}

/// Number parsed pairs 0..N-1, turning empty chord text into no chord
pub fn number_tokens(pairs: Vec<LyricPair>, chord_type: Option<ChordType>) -> Vec<LyricToken> {
    pairs
        .into_iter()
        .enumerate()
        .map(|(word_order, pair)| {
            let chord = if pair.chord.is_empty() {
                None
            } else {
                Some(pair.chord)
            };
            LyricToken {
                word_order,
                chord_type: chord.as_ref().and(chord_type),
                chord,
                word: pair.word,
            }
        })
        .collect()
}

/// Parse and number in one step
pub fn tokenize(raw: &str, options: ParseOptions, chord_type: Option<ChordType>) -> Vec<LyricToken> {
    number_tokens(parse_lyrics_with(raw, options), chord_type)
}

/// Check that word orders run 0..N-1 in sequence with no gaps or repeats
pub fn has_contiguous_order(tokens: &[LyricToken]) -> bool {
    tokens
        .iter()
        .enumerate()
        .all(|(i, token)| token.word_order == i)
}

/// Rebuild editable annotated text from stored tokens.
///
/// Feeding the result back through [`parse_lyrics_with`] with `keep_line_breaks`
/// yields the same chord/word sequence, provided the first token carries a chord.
pub fn to_annotated_text(tokens: &[LyricToken]) -> String {
    let mut text = String::new();
    let mut line_start = true;

    for token in tokens {
        if token.is_line_break() {
            text.push('\n');
            line_start = true;
            continue;
        }

        if !line_start {
            text.push(' ');
        }
        if let Some(chord) = token.chord() {
            text.push('[');
            text.push_str(chord);
            text.push(']');
        }
        text.push_str(&token.word);
        line_start = false;
    }

    text
}
