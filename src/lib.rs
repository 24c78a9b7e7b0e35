//! # chordsheet
//!
//! Lyrics and chord-chart engine: parses chord-annotated lyrics, transposes chord
//! symbols between keys, and renders chord sheets.
//!
//! ## Pipeline
//! ```text
//! "[C]Hello [G7]world"
//!        │ lyrics::parse_lyrics        (two-state scanner)
//!        ▼
//! [LyricToken { word_order: 0, word: "Hello", chord: "C" }, ...]
//!        │ render::render              (chord::transpose per token)
//!        ▼
//! [DisplayUnit::Chorded { word: "Hello", chord: "D", .. }, ...]
//!        │ format::to_text / to_html
//!        ▼
//! chord sheet
//! ```
//!
//! ## Modules
//! - `pitch` - Pitch classes, sharp/flat spelling tables
//! - `chord` - Chord symbol transposition and key offsets
//! - `lyrics` - Lyric tokens and the annotated-text parser
//! - `render` - Display units for a key and viewer preferences
//! - `format` - Plain text and HTML layout
//! - `view` - Key navigation state for a displayed sheet
//! - `song` - Song and category records, song source documents
//! - `library` - Song catalog with YAML persistence
//! - `api` - Source-to-sheet entry points

pub mod api;
pub mod chord;
pub mod error;
pub mod format;
pub mod library;
pub mod lyrics;
pub mod pitch;
pub mod render;
pub mod song;
pub mod view;

pub use api::*;
pub use chord::{semitone_offset, transpose, transpose_opt, ChordSymbol};
pub use error::*;
pub use format::{to_html, to_text};
pub use library::{NewSong, SongLibrary};
pub use lyrics::{parse_lyrics, ChordType, LyricToken, ParseOptions, LINE_BREAK};
pub use pitch::{Notation, PitchClass};
pub use render::{render, Alignment, DisplayUnit, RenderOptions};
pub use song::{parse_song_source, Category, CategoryId, Song, SongDraft, SongId};
pub use view::SheetView;
