//! Read-only pointer resolution.

use serde_json::Value;
use tracing::trace;

use crate::types::{ResolutionPath, Token};
use crate::util::tokenize;
use crate::JsonPointerError;

/// Step one token down from `current`, or `None` if there is nothing there.
///
/// A container of the wrong kind is treated the same as a missing entry.
fn step<'a>(current: &'a Value, token: &Token) -> Option<&'a Value> {
    match (current, token) {
        (Value::Array(_), Token::Append) => None,
        (Value::Array(items), Token::Index(idx)) => items.get(*idx),
        (Value::Object(map), Token::Key(key)) => map.get(key),
        (Value::Object(map), Token::Append) => map.get("-"),
        (Value::Object(_), Token::Index(_)) | (Value::Array(_), Token::Key(_)) => None,
        (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_), _) => None,
    }
}

/// Walk `pointer` from `root`, keeping every node visited.
///
/// A non-empty pointer that does not start with `/` visits only the root and
/// is reported as incomplete.
pub fn resolve_path<'a>(root: &'a Value, pointer: &str) -> ResolutionPath<'a> {
    let tokens = match tokenize(pointer) {
        Ok(tokens) => tokens,
        Err(err) => {
            trace!(%err, "pointer does not resolve");
            return ResolutionPath::new(vec![root], false);
        }
    };

    let mut nodes = Vec::with_capacity(tokens.len() + 1);
    nodes.push(root);
    let mut current = root;
    for token in &tokens {
        match step(current, token) {
            Some(next) => {
                current = next;
                nodes.push(current);
            }
            None => {
                trace!(pointer, depth = nodes.len(), "pointer not found");
                return ResolutionPath::new(nodes, false);
            }
        }
    }
    ResolutionPath::new(nodes, true)
}

/// Get the value at `pointer`, or `None` if nothing is there.
///
/// A resolved JSON `null` is `Some(&Value::Null)`, never `None`.
///
/// # Example
///
/// ```
/// use json_pointer_deep::resolve;
/// use serde_json::json;
///
/// let doc = json!({"foo": ["bar", "baz"], "": 0, "a/b": 1});
/// assert_eq!(resolve(&doc, ""), Some(&doc));
/// assert_eq!(resolve(&doc, "/foo/0"), Some(&json!("bar")));
/// assert_eq!(resolve(&doc, "/"), Some(&json!(0)));
/// assert_eq!(resolve(&doc, "/a~1b"), Some(&json!(1)));
/// assert_eq!(resolve(&doc, "/nonexistent"), None);
/// ```
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Option<&'a Value> {
    resolve_path(root, pointer).target()
}

/// Get the node `generation` steps above the value at `pointer`.
///
/// `0` is the value itself, `1` the container holding it, and so on up to the
/// root. Returns `Ok(None)` when the pointer does not resolve.
///
/// # Errors
///
/// `GenerationOutOfRange` if `generation` reaches past the root.
///
/// ```
/// use json_pointer_deep::resolve_ancestor;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [7]}});
/// assert_eq!(resolve_ancestor(&doc, "/a/b/0", 1).unwrap(), Some(&json!([7])));
/// assert!(resolve_ancestor(&doc, "/a/b/0", 4).is_err());
/// ```
pub fn resolve_ancestor<'a>(
    root: &'a Value,
    pointer: &str,
    generation: usize,
) -> Result<Option<&'a Value>, JsonPointerError> {
    resolve_path(root, pointer).ancestor(generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn library() -> Value {
        json!({
            "library": {
                "name": "library of congress",
                "section": [{
                    "name": "sci-fi",
                    "title": [
                        {"book": {"name": "Mote in Gods Eye", "author": ["Larry Niven", "Jerry Pournelle"]}},
                        {"book": {"name": "Ringworld", "copies": 2000, "author": ["Larry Niven"]}}
                    ]
                }]
            }
        })
    }

    #[test]
    fn test_resolve_root() {
        let doc = library();
        assert_eq!(resolve(&doc, ""), Some(&doc));
        assert_eq!(resolve(&json!(123), ""), Some(&json!(123)));
    }

    #[test]
    fn test_resolve_nested() {
        let doc = library();
        assert_eq!(
            resolve(&doc, "/library/name"),
            Some(&json!("library of congress"))
        );
        assert_eq!(
            resolve(&doc, "/library/section/0/name"),
            Some(&json!("sci-fi"))
        );
        assert_eq!(
            resolve(&doc, "/library/section/0/title/0/book/author/1"),
            Some(&json!("Jerry Pournelle"))
        );
        assert_eq!(
            resolve(&doc, "/library/section/0/title/1/book/copies"),
            Some(&json!(2000))
        );
    }

    #[test]
    fn test_resolve_missing() {
        let doc = library();
        assert_eq!(resolve(&doc, "/library/missing"), None);
        assert_eq!(resolve(&doc, "/library/section/1"), None);
        assert_eq!(resolve(&doc, "/library/section/0/title/5/book"), None);
    }

    #[test]
    fn test_resolve_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(resolve(&doc, "/foo"), Some(&Value::Null));
        assert_eq!(resolve(&doc, "/bar"), None);
    }

    #[test]
    fn test_resolve_append_token_on_array() {
        let doc = json!({"a": [1, 2, 3]});
        assert_eq!(resolve(&doc, "/a/-"), None);
    }

    #[test]
    fn test_resolve_dash_key_on_object() {
        let doc = json!({"a": {"-": "dash"}});
        assert_eq!(resolve(&doc, "/a/-"), Some(&json!("dash")));
    }

    #[test]
    fn test_resolve_type_mismatch_is_not_found() {
        let doc = json!({"arr": [1, 2], "obj": {"0": "zero", "k": 1}, "s": "str"});
        assert_eq!(resolve(&doc, "/arr/k"), None);
        assert_eq!(resolve(&doc, "/obj/0"), None);
        assert_eq!(resolve(&doc, "/s/0"), None);
        assert_eq!(resolve(&doc, "/s/k"), None);
    }

    #[test]
    fn test_resolve_leading_zero_index() {
        let doc = json!(["a", "b"]);
        assert_eq!(resolve(&doc, "/01"), Some(&json!("b")));
    }

    #[test]
    fn test_resolve_signed_index() {
        let doc = json!(["a", "b"]);
        assert_eq!(resolve(&doc, "/+1"), Some(&json!("b")));
        assert_eq!(resolve(&doc, "/-0"), Some(&json!("a")));
        assert_eq!(resolve(&doc, "/-1"), None);
    }

    #[test]
    fn test_resolve_without_leading_slash() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(&doc, "a"), None);
        let path = resolve_path(&doc, "a");
        assert!(!path.is_complete());
        assert_eq!(path.deepest(), &doc);
    }

    #[test]
    fn test_resolve_path_deepest() {
        let doc = json!({"a": {"b": {}}});
        let path = resolve_path(&doc, "/a/b/c/d");
        assert!(!path.is_complete());
        assert_eq!(path.len(), 3);
        assert_eq!(path.deepest(), &json!({}));
        assert_eq!(path.target(), None);
    }

    #[test]
    fn test_resolve_ancestor() {
        let doc = library();
        assert_eq!(
            resolve_ancestor(&doc, "/library/section/0/name", 0).unwrap(),
            Some(&json!("sci-fi"))
        );
        let section = resolve_ancestor(&doc, "/library/section/0/name", 1).unwrap();
        assert_eq!(section.and_then(|s| s.get("name")), Some(&json!("sci-fi")));
        assert_eq!(
            resolve_ancestor(&doc, "/library/section/0/name", 4).unwrap(),
            Some(&doc)
        );
        assert_eq!(
            resolve_ancestor(&doc, "/library/section/0/name", 5),
            Err(JsonPointerError::GenerationOutOfRange {
                generation: 5,
                depth: 5
            })
        );
        assert_eq!(resolve_ancestor(&doc, "", 0).unwrap(), Some(&doc));
        assert!(resolve_ancestor(&doc, "", 1).is_err());
    }

    #[test]
    fn test_resolve_ancestor_not_found() {
        let doc = json!({"a": {}});
        assert_eq!(resolve_ancestor(&doc, "/a/b", 0).unwrap(), None);
        assert_eq!(resolve_ancestor(&doc, "/a/b", 1).unwrap(), None);
    }
}
