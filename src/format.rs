//! # Sheet Output Formats
//!
//! Lays out rendered display units as plain text or as an HTML fragment.
//!
//! ## Text Layout
//! Lines with `above` chords get a chord row over the lyric row, with each chord
//! starting at the column of its word. Inline chords are printed in brackets in
//! front of their word.
//!
//! ```text
//! D      A7
//! Hello  world [G]again
//! ```
//!
//! Widths are counted in chars, not bytes.

use crate::lyrics::ChordType;
use crate::render::{Alignment, DisplayUnit};

/// Split display units into lines at each line break
fn split_lines(units: &[DisplayUnit]) -> Vec<&[DisplayUnit]> {
    units
        .split(|unit| matches!(unit, DisplayUnit::LineBreak))
        .collect()
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_to(row: &mut String, s: &str, slot: usize) {
    row.push_str(s);
    for _ in width(s)..slot {
        row.push(' ');
    }
}

/// Lay out one sheet line as one or two text rows
fn line_rows(line: &[DisplayUnit]) -> Vec<String> {
    let has_above = line.iter().any(|unit| {
        matches!(
            unit,
            DisplayUnit::Chorded {
                style: ChordType::Above,
                ..
            }
        )
    });

    let mut chords = String::new();
    let mut lyrics = String::new();

    for (i, unit) in line.iter().enumerate() {
        if i > 0 {
            chords.push(' ');
            lyrics.push(' ');
        }
        match unit {
            DisplayUnit::Chorded {
                word,
                chord,
                style: ChordType::Above,
            } => {
                let slot = width(word).max(width(chord) + 1);
                pad_to(&mut chords, chord, slot);
                pad_to(&mut lyrics, word, slot);
            }
            DisplayUnit::Chorded {
                word,
                chord,
                style: ChordType::Inline,
            } => {
                let text = format!("[{}]{}", chord, word);
                pad_to(&mut chords, "", width(&text));
                lyrics.push_str(&text);
            }
            DisplayUnit::Word { word } => {
                pad_to(&mut chords, "", width(word));
                lyrics.push_str(word);
            }
            DisplayUnit::LineBreak => {}
        }
    }

    let mut rows = Vec::with_capacity(2);
    if has_above {
        rows.push(chords.trim_end().to_string());
    }
    rows.push(lyrics.trim_end().to_string());
    rows
}

/// Lay out display units as a plain-text chord sheet, one `\n` after every row
pub fn to_text(units: &[DisplayUnit], alignment: Alignment) -> String {
    let rows: Vec<String> = split_lines(units).into_iter().flat_map(line_rows).collect();

    let sheet_width = match alignment {
        Alignment::Left => 0,
        Alignment::Center => rows.iter().map(|r| width(r)).max().unwrap_or(0),
    };

    let mut text = String::new();
    for row in &rows {
        if alignment == Alignment::Center && !row.is_empty() {
            for _ in 0..(sheet_width - width(row)) / 2 {
                text.push(' ');
            }
        }
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Lay out display units as an HTML fragment
pub fn to_html(units: &[DisplayUnit], alignment: Alignment) -> String {
    let mut html = String::new();

    let align_class = match alignment {
        Alignment::Left => "align-left",
        Alignment::Center => "align-center",
    };
    html.push_str(&format!("<div class=\"chord-sheet {}\">\n", align_class));

    for line in split_lines(units) {
        html.push_str("  <div class=\"line\">");
        for (i, unit) in line.iter().enumerate() {
            if i > 0 {
                html.push(' ');
            }
            html.push_str(&unit_to_html(unit));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn unit_to_html(unit: &DisplayUnit) -> String {
    match unit {
        DisplayUnit::Chorded { word, chord, style } => {
            let class = match style {
                ChordType::Above => "chord-above",
                ChordType::Inline => "chord-inline",
            };
            format!(
                "<span class=\"{}\"><span class=\"chord\">{}</span><span class=\"word\">{}</span></span>",
                class,
                escape_html(chord),
                escape_html(word)
            )
        }
        DisplayUnit::Word { word } => {
            format!("<span class=\"word\">{}</span>", escape_html(word))
        }
        DisplayUnit::LineBreak => String::new(),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
