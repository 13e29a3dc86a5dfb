//! Mutative pointer resolution: walk a pointer and create whatever is missing.
//!
//! Missing segments are filled with empty containers. The shape of each new
//! container is chosen by looking at the token that will be looked up in it
//! next: `-` or an index yields an array, anything else (or nothing) an
//! object. Existing values are never replaced on the way down.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::types::{ContainerKind, Token};
use crate::util::{prefix_pointer, tokenize};
use crate::JsonPointerError;

fn mismatch(tokens: &[Token], depth: usize, found: &Value) -> JsonPointerError {
    let err = JsonPointerError::TypeMismatch {
        pointer: prefix_pointer(tokens, depth + 1),
        expected: ContainerKind::expected_for(&tokens[depth]),
        found: ContainerKind::of(found),
    };
    debug!(%err, "cannot descend");
    err
}

/// Step into `tokens[depth]`, creating it if absent.
fn step_or_create<'a>(
    current: &'a mut Value,
    tokens: &[Token],
    depth: usize,
) -> Result<&'a mut Value, JsonPointerError> {
    let token = &tokens[depth];
    let next = tokens.get(depth + 1);
    match (current, token) {
        (Value::Array(items), Token::Append) => {
            trace!(depth, "appending object to array");
            items.push(Value::Object(Map::new()));
            let last = items.len() - 1;
            Ok(&mut items[last])
        }
        (Value::Array(items), Token::Index(idx)) => {
            let idx = *idx;
            if idx >= items.len() {
                trace!(
                    depth,
                    from = items.len(),
                    to = idx.saturating_add(1),
                    "growing array"
                );
                while items.len() <= idx {
                    items.push(ContainerKind::holder_for(next));
                }
            }
            Ok(&mut items[idx])
        }
        (Value::Object(map), Token::Key(_) | Token::Append) => {
            let key = token.as_key();
            if !map.contains_key(&key) {
                trace!(depth, key = %key, "creating object entry");
            }
            Ok(map
                .entry(key)
                .or_insert_with(|| ContainerKind::holder_for(next)))
        }
        // Scalars, an index against an object, a key against an array.
        (found, _) => Err(mismatch(tokens, depth, found)),
    }
}

/// Walk the first `depth` tokens, creating missing containers.
///
/// Lookahead may see `tokens[depth]`, so a parent walk shapes its last
/// container for the key that will be assigned into it.
fn walk_or_create<'a>(
    root: &'a mut Value,
    tokens: &[Token],
    depth: usize,
) -> Result<&'a mut Value, JsonPointerError> {
    let mut current = root;
    for i in 0..depth {
        current = step_or_create(current, tokens, i)?;
    }
    Ok(current)
}

/// Get the value at `pointer`, creating every missing container on the way.
///
/// # Errors
///
/// - `MalformedPointer` if a non-empty pointer does not begin with `/`.
/// - `TypeMismatch` if the walk must pass through a scalar, an index meets an
///   object, or a key meets an array.
///
/// Containers created before the failing segment are left in the document.
///
/// # Example
///
/// ```
/// use json_pointer_deep::resolve_or_create;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// resolve_or_create(&mut doc, "/a/0/b").unwrap();
/// assert_eq!(doc, json!({"a": [{"b": {}}]}));
/// ```
pub fn resolve_or_create<'a>(
    root: &'a mut Value,
    pointer: &str,
) -> Result<&'a mut Value, JsonPointerError> {
    let tokens = tokenize(pointer)?;
    walk_or_create(root, &tokens, tokens.len())
}

/// Write `value` at `pointer`, creating any missing parents.
///
/// An object parent has the key removed and re-inserted, so the entry ends up
/// last. An array parent has the slot replaced, or is grown with empty objects
/// until the slot exists. `-` appends to an array.
///
/// # Errors
///
/// - `MalformedPointer` if the pointer has no `/` (including `""`): the root
///   itself is never replaced.
/// - `TypeMismatch` as for [`resolve_or_create`], or if the parent is an
///   array and the last segment is not an index or `-`.
///
/// On error the document is not rolled back: parents created before the
/// failing segment stay in place.
///
/// # Example
///
/// ```
/// use json_pointer_deep::{resolve, set};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set(&mut doc, "/foo/bar", json!("baz")).unwrap();
/// assert_eq!(doc, json!({"foo": {"bar": "baz"}}));
/// assert_eq!(resolve(&doc, "/foo/bar"), Some(&json!("baz")));
/// ```
pub fn set(root: &mut Value, pointer: &str, value: Value) -> Result<(), JsonPointerError> {
    let tokens = tokenize(pointer)?;
    if tokens.is_empty() {
        return Err(JsonPointerError::MalformedPointer(pointer.to_string()));
    }
    let last = tokens.len() - 1;
    let parent = walk_or_create(root, &tokens, last)?;
    let token = &tokens[last];

    match (parent, token) {
        (Value::Object(map), _) => {
            let key = token.as_key();
            map.shift_remove(&key);
            map.insert(key, value);
        }
        (Value::Array(items), Token::Append) => items.push(value),
        (Value::Array(items), Token::Index(idx)) => {
            let idx = *idx;
            if idx < items.len() {
                items[idx] = value;
            } else {
                trace!(
                    from = items.len(),
                    to = idx.saturating_add(1),
                    "growing array for assignment"
                );
                while items.len() < idx {
                    items.push(Value::Object(Map::new()));
                }
                items.push(value);
            }
        }
        (found, _) => return Err(mismatch(&tokens, last, found)),
    }
    Ok(())
}
