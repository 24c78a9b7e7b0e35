use chordsheet::lyrics::{to_annotated_text, tokenize};
use chordsheet::{LyricToken, Notation, ParseOptions, PitchClass, RenderOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
}

fn error_json(message: impl Into<String>) -> String {
    let error = BindingError {
        message: message.into(),
    };
    serde_json::to_string(&error).unwrap_or_else(|_| r#"{"message":"unknown error"}"#.to_string())
}

fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&error_json(message))
}

fn parse_key(key: &str) -> Result<PitchClass, String> {
    key.parse()
}

fn parse_options(options_json: Option<&str>) -> Result<RenderOptions, String> {
    match options_json {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str(json).map_err(|e| format!("Invalid render options: {}", e))
        }
        _ => Ok(RenderOptions::default()),
    }
}

fn parse_tokens(tokens_json: &str) -> Result<Vec<LyricToken>, String> {
    serde_json::from_str(tokens_json).map_err(|e| format!("Invalid tokens: {}", e))
}

fn tokens_json(raw: &str, keep_line_breaks: bool) -> Result<String, String> {
    let tokens = tokenize(raw, ParseOptions { keep_line_breaks }, None);
    serde_json::to_string(&tokens).map_err(|e| e.to_string())
}

fn render_json(tokens_json: &str, semitones: i32, options_json: Option<&str>) -> Result<String, String> {
    let tokens = parse_tokens(tokens_json)?;
    let options = parse_options(options_json)?;
    let units = chordsheet::render(&tokens, semitones, &options);
    serde_json::to_string(&units).map_err(|e| e.to_string())
}

fn step(key: &str, up: bool) -> Result<String, String> {
    let key = parse_key(key)?;
    let next = if up { key.step_up() } else { key.step_down() };
    Ok(next.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("chordsheet WASM module initialized");
    }
}

/// Parse annotated lyrics into a JSON array of tokens
#[wasm_bindgen]
pub fn parse_lyrics(raw: &str, keep_line_breaks: bool) -> Result<String, JsValue> {
    tokens_json(raw, keep_line_breaks).map_err(to_js_error)
}

/// Rebuild annotated text from a JSON token array, for the song edit form
#[wasm_bindgen]
pub fn annotated_text(tokens_json: &str) -> Result<String, JsValue> {
    parse_tokens(tokens_json)
        .map(|tokens| to_annotated_text(&tokens))
        .map_err(to_js_error)
}

/// Transpose one chord symbol; unrecognized chords come back unchanged
#[wasm_bindgen]
pub fn transpose(chord: &str, semitones: i32, use_flats: bool) -> String {
    chordsheet::transpose(chord, semitones, Notation::from_use_flats(use_flats))
}

/// Semitones from a song's default key to the key being viewed
#[wasm_bindgen]
pub fn semitone_offset(default_key: &str, current_key: &str) -> Result<i32, JsValue> {
    let default_key = parse_key(default_key).map_err(to_js_error)?;
    let current_key = parse_key(current_key).map_err(to_js_error)?;
    Ok(chordsheet::semitone_offset(default_key, current_key))
}

/// Next key up or down from `key`, wrapping around the octave
#[wasm_bindgen]
pub fn step_key(key: &str, up: bool) -> Result<String, JsValue> {
    step(key, up).map_err(to_js_error)
}

/// Render a JSON token array into a JSON array of display units
#[wasm_bindgen]
pub fn render(tokens_json: &str, semitones: i32, options_json: Option<String>) -> Result<String, JsValue> {
    render_json(tokens_json, semitones, options_json.as_deref()).map_err(to_js_error)
}

/// Render a song source document as plain text
#[wasm_bindgen]
pub fn render_text(source: &str, key: Option<String>, use_flats: bool) -> Result<String, JsValue> {
    let options = RenderOptions {
        notation: Notation::from_use_flats(use_flats),
        ..RenderOptions::default()
    };
    chordsheet::render_text_with_options(source, key.as_deref(), &options)
        .map_err(|e| to_js_error(e.to_string()))
}

/// Render a song source document as an HTML fragment
#[wasm_bindgen]
pub fn render_html(source: &str, key: Option<String>, options_json: Option<String>) -> Result<String, JsValue> {
    let options = parse_options(options_json.as_deref()).map_err(to_js_error)?;
    chordsheet::render_html_with_options(source, key.as_deref(), &options)
        .map_err(|e| to_js_error(e.to_string()))
}
