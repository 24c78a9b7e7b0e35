//! # Public API
//!
//! Entry points that take a song source document all the way to a rendered sheet.
//!
//! ## Rendering Functions
//!
//! - [`render_text()`] - Plain text in the song's own key
//! - [`render_text_in_key()`] - Plain text in another key, sharp or flat spelling
//! - [`render_text_with_options()`] - Plain text with full viewer preferences
//! - [`render_html_with_options()`] - HTML fragment with full viewer preferences
//! - [`render_source()`] - Display units, for callers doing their own layout
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsheet::{render_text_in_key, Notation};
//!
//! let source = r#"---
//! title: My Song
//! key: C
//! ---
//! [C]Hello [G]world
//! "#;
//!
//! let sheet = render_text_in_key(source, "D", Notation::Sharps)?;
//! assert_eq!(sheet, "D     A\nHello world\n");
//! # Ok::<(), chordsheet::ChordSheetError>(())
//! ```

use crate::chord::semitone_offset;
use crate::error::ChordSheetError;
use crate::format::{to_html, to_text};
use crate::pitch::{Notation, PitchClass};
use crate::render::{render, DisplayUnit, RenderOptions};
use crate::song::parse_song_source;

fn parse_key(key: &str) -> Result<PitchClass, ChordSheetError> {
    key.parse().map_err(ChordSheetError::MetadataError)
}

/// Render a song source into display units.
///
/// `key` is the key to view the song in; `None` keeps the song's default key.
///
/// # Errors
/// Returns [`ChordSheetError::MetadataError`] if the source header is invalid or
/// `key` is not a recognized spelling.
pub fn render_source(
    source: &str,
    key: Option<&str>,
    options: &RenderOptions,
) -> Result<Vec<DisplayUnit>, ChordSheetError> {
    let draft = parse_song_source(source)?;
    let current_key = match key {
        Some(key) => parse_key(key)?,
        None => draft.default_key,
    };
    let semitones = semitone_offset(draft.default_key, current_key);
    log::debug!(
        "rendering '{}' from {} to {} ({:+} semitones)",
        draft.title,
        draft.default_key,
        current_key,
        semitones
    );
    Ok(render(&draft.tokens, semitones, options))
}

/// Render a song source as plain text in its default key.
///
/// # Example
/// ```rust
/// use chordsheet::render_text;
///
/// let sheet = render_text("---\ntitle: T\nkey: G\n---\n[G]la [D7]la")?;
/// assert_eq!(sheet, "G  D7\nla la\n");
/// # Ok::<(), chordsheet::ChordSheetError>(())
/// ```
pub fn render_text(source: &str) -> Result<String, ChordSheetError> {
    render_text_with_options(source, None, &RenderOptions::default())
}

/// Render a song source as plain text in `key`, spelled with `notation`
pub fn render_text_in_key(source: &str, key: &str, notation: Notation) -> Result<String, ChordSheetError> {
    let options = RenderOptions {
        notation,
        ..RenderOptions::default()
    };
    render_text_with_options(source, Some(key), &options)
}

/// Render a song source as plain text with custom viewer preferences
pub fn render_text_with_options(
    source: &str,
    key: Option<&str>,
    options: &RenderOptions,
) -> Result<String, ChordSheetError> {
    let units = render_source(source, key, options)?;
    Ok(to_text(&units, options.alignment))
}

/// Render a song source as an HTML fragment with custom viewer preferences
pub fn render_html_with_options(
    source: &str,
    key: Option<&str>,
    options: &RenderOptions,
) -> Result<String, ChordSheetError> {
    let units = render_source(source, key, options)?;
    Ok(to_html(&units, options.alignment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::ChordType;
    use crate::render::Alignment;

    const SOURCE: &str = "---\ntitle: T\nkey: C\n---\n[C]Hello [G7]world\n[Am]again";

    #[test]
    fn test_render_source_default_key() {
        let units = render_source(SOURCE, None, &RenderOptions::default()).unwrap();
        assert_eq!(units.len(), 4);
        assert_eq!(units[2], DisplayUnit::LineBreak);
    }

    #[test]
    fn test_render_text_in_key_with_flats() {
        let sheet = render_text_in_key(SOURCE, "Eb", Notation::Flats).unwrap();
        assert_eq!(sheet, "Eb    Bb7\nHello world\nCm\nagain\n");
    }

    #[test]
    fn test_unknown_view_key() {
        let err = render_text_in_key(SOURCE, "X", Notation::Sharps).unwrap_err();
        assert_eq!(err.to_string(), "Invalid metadata: Unknown key: X");
    }

    #[test]
    fn test_inline_centered_text() {
        let options = RenderOptions {
            placement: ChordType::Inline,
            alignment: Alignment::Center,
            ..RenderOptions::default()
        };
        let sheet = render_text_with_options(SOURCE, Some("D"), &options).unwrap();
        assert_eq!(sheet, "[D]Hello [A7]world\n    [Bm]again\n");
    }

    #[test]
    fn test_html_output() {
        let html = render_html_with_options(SOURCE, None, &RenderOptions::default()).unwrap();
        assert!(html.starts_with("<div class=\"chord-sheet align-left\">"));
        assert_eq!(html.matches("<div class=\"line\">").count(), 2);
        assert!(html.contains("<span class=\"chord\">G7</span>"));
    }
}
