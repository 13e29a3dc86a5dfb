//! Escaping, parsing and formatting of pointer segments.

use crate::types::Token;
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_pointer_deep::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use json_pointer_deep::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("no-escapes"), "no-escapes");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into unescaped path components.
///
/// The empty pointer yields no components. Anything before the first `/` is
/// the root anchor and is discarded.
///
/// # Example
///
/// ```
/// use json_pointer_deep::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    match pointer.split_once('/') {
        None => Vec::new(),
        Some((_, rest)) => rest.split('/').map(unescape_component).collect(),
    }
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Parse a decoded token as an array index.
///
/// Accepts a non-empty run of ASCII digits that fits in `usize`, leading zeros
/// included, with an optional `+` sign. A `-` sign is only accepted on zero.
///
/// ```
/// use json_pointer_deep::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("007"), Some(7));
/// assert_eq!(parse_index("+1"), Some(1));
/// assert_eq!(parse_index("-0"), Some(0));
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("-"), None);
/// ```
pub fn parse_index(token: &str) -> Option<usize> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'+') => (false, &token[1..]),
        Some(b'-') => (true, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let idx: usize = digits.parse().ok()?;
    if negative && idx != 0 {
        return None;
    }
    Some(idx)
}

/// Split a pointer into classified tokens.
///
/// # Errors
///
/// `MalformedPointer` if the pointer is non-empty and does not begin with `/`.
pub(crate) fn tokenize(pointer: &str) -> Result<Vec<Token>, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    match pointer.strip_prefix('/') {
        Some(rest) => Ok(rest.split('/').map(Token::parse).collect()),
        None => Err(JsonPointerError::MalformedPointer(pointer.to_string())),
    }
}

/// Render the first `len` tokens back into pointer form, for error messages.
pub(crate) fn prefix_pointer(tokens: &[Token], len: usize) -> String {
    let mut out = String::new();
    for token in &tokens[..len.min(tokens.len())] {
        out.push('/');
        out.push_str(&escape_component(&token.to_string()));
    }
    out
}
