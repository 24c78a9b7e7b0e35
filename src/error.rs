//! # Error Types
//!
//! This module defines the error type for the song catalog and the song source format.
//!
//! The chord engine itself (`pitch`, `chord`, `lyrics`, `render`) never fails: unknown
//! chords pass through and malformed annotations are skipped. Errors only come from
//! the layers around it, i.e. reading song sources, editing the library and file I/O.
//!
//! ## Usage
//! ```rust
//! use chordsheet::{render_text, ChordSheetError};
//!
//! match render_text("[C]no frontmatter here") {
//!     Ok(sheet) => println!("{}", sheet),
//!     Err(ChordSheetError::MetadataError(msg)) => eprintln!("Bad song header: {}", msg),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordSheetError {
    /// Invalid or missing YAML frontmatter in a song source.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::MetadataError("Unknown key: H".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: Unknown key: H");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// A song failed validation before it was stored.
    #[error("Invalid song: {0}")]
    InvalidSong(String),

    /// A category failed validation before it was stored.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Category names are unique across the library.
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    /// A category cannot be removed while songs still reference it.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::CategoryInUse { name: "Hymns".to_string(), songs: 3 };
    /// assert_eq!(err.to_string(), "Category 'Hymns' is still used by 3 song(s)");
    /// ```
    #[error("Category '{name}' is still used by {songs} song(s)")]
    CategoryInUse { name: String, songs: usize },

    #[error("Song {0} not found")]
    SongNotFound(u64),

    #[error("Category {0} not found")]
    CategoryNotFound(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
