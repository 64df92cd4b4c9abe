//! Word list loading for the command-line front end.
//!
//! A `.json` file holds an array of strings. Any other file is read as one
//! word per line, filtered according to [`InputConfig`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::InputConfig;
use crate::error::{LanaiError, LanaiResult};

/// Reads the words stored in `path`.
///
/// # Errors
///
/// Fails if the file cannot be read, or if a `.json` file is not an array of strings.
pub fn load_words(path: &Path, config: &InputConfig) -> LanaiResult<Vec<String>> {
    let text = fs::read_to_string(path)?;

    let words = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&text)?,
        _ => parse_lines(&text, config),
    };

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parses a JSON array of strings.
pub fn parse_json(text: &str) -> LanaiResult<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => Err(LanaiError::Input(format!(
            "expected a JSON array of strings, found {}",
            json_kind(&other)
        ))),
    }
}

/// Splits `text` into one word per line.
pub fn parse_lines(text: &str, config: &InputConfig) -> Vec<String> {
    text.lines()
        .map(|line| if config.trim { line.trim() } else { line })
        .filter(|line| !(config.skip_blank_lines && line.trim().is_empty()))
        .filter(|line| match config.comment_prefix.as_deref() {
            Some(marker) => !line.starts_with(marker),
            None => true,
        })
        .map(str::to_owned)
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
