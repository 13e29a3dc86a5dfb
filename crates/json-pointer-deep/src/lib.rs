//! JSON Pointer (RFC 6901) resolution with deep-set.
//!
//! Reads a value at a pointer that may or may not exist, and writes a value
//! at a pointer, creating any missing intermediate objects or arrays on the
//! way (`mkdir -p` for JSON trees).
//!
//! # Example
//!
//! ```
//! use json_pointer_deep::{resolve, set};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! assert_eq!(resolve(&doc, "/this/is/a/0/new/thing"), None);
//!
//! set(&mut doc, "/this/is/a/0/new/thing", json!("hello world")).unwrap();
//! assert_eq!(
//!     doc,
//!     json!({"this": {"is": {"a": [{"new": {"thing": "hello world"}}]}}})
//! );
//! assert_eq!(
//!     resolve(&doc, "/this/is/a/0/new/thing"),
//!     Some(&json!("hello world"))
//! );
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod lenient;
pub mod resolve;
pub mod types;
pub mod util;
pub mod validate;
pub mod vivify;

pub use lenient::LenientExt;
pub use resolve::{resolve, resolve_ancestor, resolve_path};
pub use types::{ContainerKind, ResolutionPath, Token};
pub use util::{
    escape_component, format_json_pointer, parse_index, parse_json_pointer, unescape_component,
};
pub use validate::{
    validate_json_pointer, ValidationError, MAX_ARRAY_INDEX, MAX_POINTER_LENGTH, MAX_SEGMENTS,
};
pub use vivify::{resolve_or_create, set};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("generation {generation} is out of range for a path of depth {depth}")]
    GenerationOutOfRange { generation: usize, depth: usize },
    #[error("malformed pointer {0:?}: expected a leading '/'")]
    MalformedPointer(String),
    #[error("cannot descend into {found} at {pointer:?}: expected {expected}")]
    TypeMismatch {
        pointer: String,
        expected: ContainerKind,
        found: ContainerKind,
    },
}

/// A JSON document paired with pointer operations.
///
/// ```
/// use json_pointer_deep::JsonPointer;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let mut pointer = JsonPointer::new(&mut doc);
/// assert_eq!(pointer.at("/foo/bar"), None);
/// pointer.set("/foo/bar", json!("baz")).unwrap();
/// assert_eq!(pointer.at("/foo/bar"), Some(&json!("baz")));
/// assert_eq!(doc.to_string(), r#"{"foo":{"bar":"baz"}}"#);
/// ```
#[derive(Debug)]
pub struct JsonPointer<'a> {
    element: &'a mut Value,
}

impl<'a> JsonPointer<'a> {
    pub fn new(element: &'a mut Value) -> Self {
        Self { element }
    }

    /// The underlying document.
    pub fn element(&self) -> &Value {
        &*self.element
    }

    pub fn at(&self, pointer: &str) -> Option<&Value> {
        resolve(&*self.element, pointer)
    }

    pub fn at_generation(
        &self,
        pointer: &str,
        generation: usize,
    ) -> Result<Option<&Value>, JsonPointerError> {
        resolve_ancestor(&*self.element, pointer, generation)
    }

    pub fn path(&self, pointer: &str) -> ResolutionPath<'_> {
        resolve_path(&*self.element, pointer)
    }

    pub fn set(&mut self, pointer: &str, value: Value) -> Result<(), JsonPointerError> {
        set(self.element, pointer, value)
    }

    pub fn get_or_create(&mut self, pointer: &str) -> Result<&mut Value, JsonPointerError> {
        resolve_or_create(self.element, pointer)
    }
}
