//! # Song Library
//!
//! An in-memory catalog of songs and categories that can be saved to and loaded from
//! YAML.
//!
//! ## Ownership Rules
//! - A song owns its lyric tokens. Removing the song removes them.
//! - Editing a song re-parses its lyrics and replaces the whole token set, renumbered
//!   from 0. A failed edit leaves the stored song untouched.
//! - A category is referenced by songs, not owned. It cannot be removed while any
//!   song is filed under it.
//! - Category names are unique (compared after trimming).
//! - Ids come from counters that only increase, so a removed id is never handed out
//!   again.
//! - Loading checks these rules too: unique ids and category names, known category
//!   references, and word orders running 0..N-1 in stored order.
//!
//! ## Example
//! ```rust
//! use chordsheet::library::{NewSong, SongLibrary};
//!
//! let mut library = SongLibrary::new();
//! let hymns = library.add_category("Hymns", "Traditional hymns").unwrap();
//!
//! let mut song = NewSong::new("Amazing Grace", "G".parse().unwrap(), "admin");
//! song.category_id = Some(hymns);
//! song.lyrics = "[G]Amazing [C]grace".to_string();
//! let id = library.create_song(song).unwrap();
//!
//! assert_eq!(library.song(id).unwrap().tokens.len(), 2);
//! assert!(library.remove_category(hymns).is_err());
//! ```

use crate::error::ChordSheetError;
use crate::lyrics::{has_contiguous_order, tokenize, ChordType, ParseOptions};
use crate::pitch::PitchClass;
use crate::song::{parse_song_source, Category, CategoryId, Song, SongId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Fields a caller supplies when creating or editing a song
#[derive(Debug, Clone, PartialEq)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub default_key: PitchClass,
    pub category_id: Option<CategoryId>,
    pub creator_id: String,
    /// Annotated lyric text, e.g. `[C]Hello [G7]world`
    pub lyrics: String,
    pub parse_options: ParseOptions,
    pub chord_type: Option<ChordType>,
}

impl NewSong {
    pub fn new(title: impl Into<String>, default_key: PitchClass, creator_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: String::new(),
            default_key,
            category_id: None,
            creator_id: creator_id.into(),
            lyrics: String::new(),
            parse_options: ParseOptions::default(),
            chord_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongLibrary {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    songs: Vec<Song>,
    #[serde(default)]
    next_song_id: u64,
    #[serde(default)]
    next_category_id: u64,
}

impl SongLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a library from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChordSheetError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let library = Self::from_yaml(&contents)?;
        log::info!(
            "loaded library from {:?}: {} song(s), {} categor(ies)",
            path.as_ref(),
            library.songs.len(),
            library.categories.len()
        );
        Ok(library)
    }

    /// Save the library to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ChordSheetError> {
        fs::write(path.as_ref(), self.to_yaml()?)?;
        log::info!("saved library to {:?}", path.as_ref());
        Ok(())
    }

    /// Parse a library, rejecting files that break the catalog rules
    pub fn from_yaml(yaml: &str) -> Result<Self, ChordSheetError> {
        let mut library: Self = serde_yaml::from_str(yaml)?;
        library.validate()?;
        library.repair_counters()?;
        Ok(library)
    }

    pub fn to_yaml(&self) -> Result<String, ChordSheetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ChordSheetError> {
        let mut category_ids = HashSet::new();
        let mut category_names = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(ChordSheetError::InvalidCategory(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
            let name = category.name.trim();
            if name.is_empty() {
                return Err(ChordSheetError::InvalidCategory(format!(
                    "category {} has an empty name",
                    category.id
                )));
            }
            if !category_names.insert(name) {
                return Err(ChordSheetError::DuplicateCategory(name.to_string()));
            }
        }

        let mut song_ids = HashSet::new();
        for song in &self.songs {
            if !song_ids.insert(song.id) {
                return Err(ChordSheetError::InvalidSong(format!("duplicate song id {}", song.id)));
            }
            if let Some(category_id) = song.category_id {
                if !category_ids.contains(&category_id) {
                    return Err(ChordSheetError::CategoryNotFound(category_id.0));
                }
            }
            if !has_contiguous_order(&song.tokens) {
                return Err(ChordSheetError::InvalidSong(format!(
                    "song {} has word orders that do not run 0..{}",
                    song.id,
                    song.tokens.len()
                )));
            }
        }
        Ok(())
    }

    /// Keep counters ahead of every stored id, even for hand-edited files
    fn repair_counters(&mut self) -> Result<(), ChordSheetError> {
        for song in &self.songs {
            let next = song.id.0.checked_add(1).ok_or_else(|| {
                ChordSheetError::InvalidSong(format!("song id {} leaves no room for new ids", song.id))
            })?;
            self.next_song_id = self.next_song_id.max(next);
        }
        for category in &self.categories {
            let next = category.id.0.checked_add(1).ok_or_else(|| {
                ChordSheetError::InvalidCategory(format!(
                    "category id {} leaves no room for new ids",
                    category.id
                ))
            })?;
            self.next_category_id = self.next_category_id.max(next);
        }
        Ok(())
    }

    // Categories

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories.iter().find(|c| c.name == name)
    }

    fn check_category_name(&self, name: &str, except: Option<CategoryId>) -> Result<(), ChordSheetError> {
        if name.is_empty() {
            return Err(ChordSheetError::InvalidCategory("name must not be empty".to_string()));
        }
        match self.category_by_name(name) {
            Some(existing) if Some(existing.id) != except => {
                Err(ChordSheetError::DuplicateCategory(name.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn add_category(&mut self, name: &str, description: &str) -> Result<CategoryId, ChordSheetError> {
        let name = name.trim();
        self.check_category_name(name, None)?;

        let id = CategoryId(self.next_category_id);
        self.next_category_id += 1;
        self.categories.push(Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
        });
        log::info!("added category {} '{}'", id, name);
        Ok(id)
    }

    pub fn update_category(&mut self, id: CategoryId, name: &str, description: &str) -> Result<(), ChordSheetError> {
        let name = name.trim();
        self.check_category_name(name, Some(id))?;

        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ChordSheetError::CategoryNotFound(id.0))?;
        category.name = name.to_string();
        category.description = description.to_string();
        Ok(())
    }

    /// Remove a category that no song references
    pub fn remove_category(&mut self, id: CategoryId) -> Result<Category, ChordSheetError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(ChordSheetError::CategoryNotFound(id.0))?;

        let songs = self.songs_in_category(id).count();
        if songs > 0 {
            return Err(ChordSheetError::CategoryInUse {
                name: self.categories[index].name.clone(),
                songs,
            });
        }

        let category = self.categories.remove(index);
        log::info!("removed category {} '{}'", id, category.name);
        Ok(category)
    }

    // Songs

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn songs_in_category(&self, id: CategoryId) -> impl Iterator<Item = &Song> {
        self.songs.iter().filter(move |s| s.category_id == Some(id))
    }

    /// Field checks that do not depend on library contents
    fn check_song_fields(new: &NewSong) -> Result<(), ChordSheetError> {
        if new.title.trim().is_empty() {
            return Err(ChordSheetError::InvalidSong("title must not be empty".to_string()));
        }
        if new.creator_id.trim().is_empty() {
            return Err(ChordSheetError::InvalidSong("creator must not be empty".to_string()));
        }
        Ok(())
    }

    /// Validate a new or edited song and build its stored form
    fn build_song(&self, id: SongId, new: NewSong) -> Result<Song, ChordSheetError> {
        Self::check_song_fields(&new)?;
        if let Some(category_id) = new.category_id {
            if self.category(category_id).is_none() {
                return Err(ChordSheetError::CategoryNotFound(category_id.0));
            }
        }

        let tokens = tokenize(&new.lyrics, new.parse_options, new.chord_type);

        Ok(Song {
            id,
            title: new.title.trim().to_string(),
            artist: new.artist.trim().to_string(),
            default_key: new.default_key,
            category_id: new.category_id,
            creator_id: new.creator_id,
            tokens,
        })
    }

    pub fn create_song(&mut self, new: NewSong) -> Result<SongId, ChordSheetError> {
        let id = SongId(self.next_song_id);
        let song = self.build_song(id, new)?;

        self.next_song_id += 1;
        log::info!("created song {} '{}' with {} token(s)", id, song.title, song.tokens.len());
        self.songs.push(song);
        Ok(id)
    }

    /// Replace every field of a song, including its full token set
    pub fn update_song(&mut self, id: SongId, new: NewSong) -> Result<(), ChordSheetError> {
        let index = self
            .songs
            .iter()
            .position(|s| s.id == id)
            .ok_or(ChordSheetError::SongNotFound(id.0))?;

        let song = self.build_song(id, new)?;
        log::info!(
            "updated song {}: {} token(s) replaced by {}",
            id,
            self.songs[index].tokens.len(),
            song.tokens.len()
        );
        self.songs[index] = song;
        Ok(())
    }

    /// Remove a song together with its tokens
    pub fn remove_song(&mut self, id: SongId) -> Result<Song, ChordSheetError> {
        let index = self
            .songs
            .iter()
            .position(|s| s.id == id)
            .ok_or(ChordSheetError::SongNotFound(id.0))?;

        let song = self.songs.remove(index);
        log::info!("removed song {} '{}'", id, song.title);
        Ok(song)
    }

    /// File a song source document, creating its category on first use.
    ///
    /// The song is checked before a new category is added, so a rejected import
    /// leaves the library unchanged.
    pub fn import_source(&mut self, source: &str, creator_id: &str) -> Result<SongId, ChordSheetError> {
        let draft = parse_song_source(source)?;

        let mut new = NewSong {
            title: draft.title,
            artist: draft.artist,
            default_key: draft.default_key,
            category_id: None,
            creator_id: creator_id.to_string(),
            lyrics: draft.lyrics,
            parse_options: ParseOptions { keep_line_breaks: true },
            chord_type: draft.chord_type,
        };
        Self::check_song_fields(&new)?;

        new.category_id = match draft.category.as_deref() {
            Some(name) => match self.category_by_name(name) {
                Some(category) => Some(category.id),
                None => Some(self.add_category(name, "")?),
            },
            None => None,
        };

        self.create_song(new)
    }
}
