//! Integration tests for chordsheet
//!
//! Tests the full pipeline from authored lyrics and song sources to rendered sheets.

use chordsheet::lyrics::{has_contiguous_order, to_annotated_text, tokenize};
use chordsheet::{
    render, render_text, render_text_in_key, semitone_offset, to_text, transpose, Alignment,
    DisplayUnit, NewSong, Notation, ParseOptions, PitchClass, RenderOptions, SheetView,
    SongLibrary,
};

const GRACE: &str = r#"---
title: Amazing Grace
artist: John Newton
key: G
category: Hymns
---
[G]Amazing [G7]grace, how [C]sweet the [G]sound
[G]That saved a [Em]wretch like [D]me
"#;

fn key(s: &str) -> PitchClass {
    s.parse().unwrap()
}

fn chords(units: &[DisplayUnit]) -> Vec<String> {
    units
        .iter()
        .filter_map(|u| match u {
            DisplayUnit::Chorded { chord, .. } => Some(chord.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_reference_parse_examples() {
    let tokens = tokenize("[C]Hello [G7]world", ParseOptions::default(), None);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].chord.as_deref(), Some("C"));
    assert_eq!(tokens[0].word, "Hello");
    assert_eq!(tokens[1].chord.as_deref(), Some("G7"));
    assert_eq!(tokens[1].word, "world");

    let tokens = tokenize("[Am]one [F]two [C]three [G]four", ParseOptions::default(), None);
    let orders: Vec<usize> = tokens.iter().map(|t| t.word_order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3]);
}

#[test]
fn test_default_c_viewed_in_d() {
    let tokens = tokenize("[C]la [G]la", ParseOptions::default(), None);
    let offset = semitone_offset(key("C"), key("D"));
    assert_eq!(offset, 2);

    let units = render(&tokens, offset, &RenderOptions::default());
    assert_eq!(chords(&units), vec!["D", "A"]);
}

#[test]
fn test_render_song_source_in_default_key() {
    let sheet = render_text(GRACE).unwrap();
    let lines: Vec<&str> = sheet.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "Amazing grace, how sweet the sound");
    assert!(lines[0].starts_with("G       G7"));
    assert_eq!(lines[3], "That saved a wretch like me");
}

#[test]
fn test_render_song_source_transposed() {
    let sheet = render_text_in_key(GRACE, "A", Notation::Sharps).unwrap();
    let chord_line: Vec<&str> = sheet.lines().next().unwrap().split_whitespace().collect();
    assert_eq!(chord_line, vec!["A", "A7", "D", "A"]);

    let sheet = render_text_in_key(GRACE, "F", Notation::Flats).unwrap();
    let second_chords: Vec<&str> = sheet.lines().nth(2).unwrap().split_whitespace().collect();
    assert_eq!(second_chords, vec!["F", "Dm", "C"]);
}

#[test]
fn test_library_to_view_pipeline() {
    let mut library = SongLibrary::new();
    let id = library.import_source(GRACE, "admin").unwrap();
    let song = library.song(id).unwrap().clone();
    assert!(has_contiguous_order(&song.tokens));

    let mut view = SheetView::new(song.default_key);
    view.key_up();
    view.key_up();
    assert_eq!(view.current_key(), key("A"));

    let units = view.render(&song.tokens);
    assert_eq!(chords(&units)[..4], ["A", "A7", "D", "A"]);

    // Rendering never touches the stored song
    assert_eq!(library.song(id).unwrap(), &song);
}

#[test]
fn test_edit_round_trip_through_annotated_text() {
    let mut library = SongLibrary::new();
    let id = library.import_source(GRACE, "admin").unwrap();
    let original = library.song(id).unwrap().clone();

    // The edit form shows annotated text; saving it unchanged keeps the tokens
    let mut edit = NewSong::new(original.title.clone(), original.default_key, "admin");
    edit.category_id = original.category_id;
    edit.lyrics = to_annotated_text(&original.tokens);
    edit.parse_options = ParseOptions { keep_line_breaks: true };
    library.update_song(id, edit).unwrap();

    assert_eq!(library.song(id).unwrap().tokens, original.tokens);
}

#[test]
fn test_free_form_annotations_survive_transposition() {
    let tokens = tokenize("[N.C.]spoken [%]again [G/B]walk", ParseOptions::default(), None);
    let units = render(&tokens, 5, &RenderOptions::default());
    assert_eq!(chords(&units), vec!["N.C.", "%", "C/B"]);
}

#[test]
fn test_hidden_chords_text() {
    let tokens = tokenize("[C]one\n[G]two", ParseOptions { keep_line_breaks: true }, None);
    let options = RenderOptions {
        show_chords: false,
        ..RenderOptions::default()
    };
    let units = render(&tokens, 0, &options);
    assert_eq!(to_text(&units, Alignment::Left), "one\ntwo\n");
}

#[test]
fn test_transpose_cycle_through_all_keys() {
    let mut chord = "C".to_string();
    for _ in 0..12 {
        chord = transpose(&chord, 7, Notation::Sharps);
    }
    assert_eq!(chord, "C");
}
