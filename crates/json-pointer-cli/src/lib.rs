//! Command logic behind the `json-pointer` binary.
//!
//! - `get`: print the value at a pointer (or one of its ancestors)
//! - `set`: deep-set a value at a pointer and print the whole document

use json_pointer_deep::{
    resolve_ancestor, set, validate_json_pointer, JsonPointerError, ValidationError,
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("{0}")]
    Pointer(#[from] JsonPointerError),
    #[error("NOT_FOUND")]
    NotFound,
}

// ── Output ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

pub fn render(value: &Value, style: OutputStyle) -> Result<String, CliError> {
    Ok(match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(value)?,
        OutputStyle::Compact => serde_json::to_string(value)?,
    })
}

/// Interpret a command-line value: JSON if it parses, otherwise a string.
pub fn parse_value_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

// ── get ───────────────────────────────────────────────────────────────────

/// Look up `pointer` in a document and render the node `generation` levels
/// above the target (`0` for the target itself).
pub fn lookup_pointer(
    doc_json: &str,
    pointer: &str,
    generation: usize,
    style: OutputStyle,
) -> Result<String, CliError> {
    validate_json_pointer(pointer)?;
    let doc: Value = serde_json::from_str(doc_json)?;
    let found = resolve_ancestor(&doc, pointer, generation)?.ok_or(CliError::NotFound)?;
    render(found, style)
}

// ── set ───────────────────────────────────────────────────────────────────

/// Deep-set `value` at `pointer` and render the resulting document.
///
/// Blank input starts from an empty object.
pub fn set_pointer(
    doc_json: &str,
    pointer: &str,
    value: Value,
    style: OutputStyle,
) -> Result<String, CliError> {
    validate_json_pointer(pointer)?;
    let mut doc = if doc_json.trim().is_empty() {
        debug!("empty input, starting from an empty object");
        Value::Object(Map::new())
    } else {
        serde_json::from_str(doc_json)?
    };
    set(&mut doc, pointer, value)?;
    render(&doc, style)
}

// ── Tests ─────────────────────────────────────────────────────────────────
