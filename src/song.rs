//! # Songs and Categories
//!
//! The catalog records a song owns its lyric tokens, and a category is only referenced
//! by the songs filed under it.
//!
//! ## Song Source Format
//! Songs are authored as annotated lyrics with a YAML header:
//!
//! ```text
//! ---
//! title: Amazing Grace
//! artist: John Newton
//! key: G
//! category: Hymns
//! chord-type: above
//! ---
//! [G]Amazing [G7]grace, how [C]sweet the [G]sound
//! ```
//!
//! `title` and `key` are required. The key accepts sharp or flat spellings and is
//! stored as a pitch class.
//!
//! ## Example
//! ```rust
//! use chordsheet::parse_song_source;
//!
//! let draft = parse_song_source("---\ntitle: Test\nkey: Eb\n---\n[Eb]la [Bb]la").unwrap();
//! assert_eq!(draft.title, "Test");
//! assert_eq!(draft.default_key.to_string(), "D#");
//! assert_eq!(draft.tokens.len(), 2);
//! ```

use crate::error::ChordSheetError;
use crate::lyrics::{tokenize, ChordType, LyricToken, ParseOptions};
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub default_key: PitchClass,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub creator_id: String,
    /// Ordered by `word_order`, which runs 0..N-1
    #[serde(default)]
    pub tokens: Vec<LyricToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Frontmatter fields as written in a song source
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawSongMetadata {
    title: Option<String>,
    artist: Option<String>,
    key: Option<String>,
    category: Option<String>,
    chord_type: Option<ChordType>,
}

/// A song parsed from a source document, not yet filed in a library
#[derive(Debug, Clone, PartialEq)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub default_key: PitchClass,
    /// Category name, resolved against a library on import
    pub category: Option<String>,
    pub chord_type: Option<ChordType>,
    /// Lyric body exactly as authored
    pub lyrics: String,
    pub tokens: Vec<LyricToken>,
}

/// Split a source into its frontmatter block and the remaining body.
///
/// The block must open on the first non-blank line with a `---` fence and runs to
/// the next `---` line. A `---` anywhere else is left in the body.
pub(crate) fn extract_frontmatter(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    let Some(start) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return (None, source.to_string());
    };
    if lines[start].trim() != "---" {
        return (None, source.to_string());
    }

    match lines[start + 1..].iter().position(|line| line.trim() == "---") {
        Some(offset) => {
            let end = start + 1 + offset;
            let frontmatter = lines[start + 1..end].join("\n");
            (Some(frontmatter), lines[end + 1..].join("\n"))
        }
        None => (None, source.to_string()),
    }
}

/// Parse a song source document into a draft.
///
/// The lyric body is tokenized with line breaks kept, so verses and lines survive
/// into the rendered sheet.
pub fn parse_song_source(source: &str) -> Result<SongDraft, ChordSheetError> {
    let (frontmatter, body) = extract_frontmatter(source);

    let frontmatter = frontmatter.ok_or_else(|| {
        ChordSheetError::MetadataError("missing '---' frontmatter block".to_string())
    })?;

    let raw: RawSongMetadata = if frontmatter.trim().is_empty() {
        RawSongMetadata::default()
    } else {
        serde_yaml::from_str(&frontmatter)
            .map_err(|e| ChordSheetError::MetadataError(e.to_string()))?
    };

    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ChordSheetError::MetadataError("title is required".to_string()))?;

    let key = raw
        .key
        .ok_or_else(|| ChordSheetError::MetadataError("key is required".to_string()))?;
    let default_key = key
        .parse::<PitchClass>()
        .map_err(ChordSheetError::MetadataError)?;

    let lyrics = body.trim_matches('\n').to_string();
    let tokens = tokenize(&lyrics, ParseOptions { keep_line_breaks: true }, raw.chord_type);

    Ok(SongDraft {
        title,
        artist: raw.artist.unwrap_or_default(),
        default_key,
        category: raw.category.filter(|c| !c.trim().is_empty()),
        chord_type: raw.chord_type,
        lyrics,
        tokens,
    })
}
