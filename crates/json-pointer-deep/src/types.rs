//! Type definitions for JSON Pointer resolution.

use std::fmt;

use serde_json::{Map, Value};

use crate::util::{parse_index, unescape_component};
use crate::JsonPointerError;

/// A decoded path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The `-` token: the position after the last element of an array.
    Append,
    /// A non-negative integer segment.
    Index(usize),
    /// Any other segment, used as an object key.
    Key(String),
}

impl Token {
    /// Decode and classify one raw (still escaped) segment.
    pub fn parse(raw: &str) -> Token {
        let decoded = unescape_component(raw);
        if decoded == "-" {
            return Token::Append;
        }
        match parse_index(&decoded) {
            Some(idx) => Token::Index(idx),
            None => Token::Key(decoded),
        }
    }

    /// Whether a holder created ahead of this token should be an array.
    pub fn wants_array(&self) -> bool {
        matches!(self, Token::Append | Token::Index(_))
    }

    /// The segment as it would be used for an object key.
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Append => f.write_str("-"),
            Token::Index(idx) => write!(f, "{idx}"),
            Token::Key(key) => f.write_str(key),
        }
    }
}

/// The shape of a JSON value as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Object,
    Array,
    Scalar,
}

impl ContainerKind {
    pub fn of(value: &Value) -> ContainerKind {
        match value {
            Value::Object(_) => ContainerKind::Object,
            Value::Array(_) => ContainerKind::Array,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                ContainerKind::Scalar
            }
        }
    }

    /// The container expected to hold `token`.
    pub fn expected_for(token: &Token) -> ContainerKind {
        if token.wants_array() {
            ContainerKind::Array
        } else {
            ContainerKind::Object
        }
    }

    /// A fresh empty container to stand in for a missing segment, shaped by
    /// the token that will be looked up in it next.
    pub fn holder_for(next: Option<&Token>) -> Value {
        match next {
            Some(token) if token.wants_array() => Value::Array(Vec::new()),
            _ => Value::Object(Map::new()),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerKind::Object => "object",
            ContainerKind::Array => "array",
            ContainerKind::Scalar => "scalar",
        })
    }
}

/// The nodes visited while resolving a pointer, root first.
///
/// When the walk stops early the last node is the deepest one that exists
/// and [`ResolutionPath::is_complete`] is false.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionPath<'a> {
    nodes: Vec<&'a Value>,
    complete: bool,
}

impl<'a> ResolutionPath<'a> {
    pub(crate) fn new(nodes: Vec<&'a Value>, complete: bool) -> Self {
        Self { nodes, complete }
    }

    /// Whether every token of the pointer was resolved.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of nodes visited, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is visited even for unresolvable pointers.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The visited nodes, root first.
    pub fn nodes(&self) -> &[&'a Value] {
        &self.nodes
    }

    /// The resolved node, or `None` if the walk stopped early.
    pub fn target(&self) -> Option<&'a Value> {
        if !self.complete {
            return None;
        }
        self.nodes.last().copied()
    }

    /// The last node reached, whether or not the walk completed.
    pub fn deepest(&self) -> &'a Value {
        self.nodes[self.nodes.len() - 1]
    }

    /// The node `generation` steps above the resolved node.
    ///
    /// Generation `0` is the node itself, `1` its parent container and so on.
    ///
    /// # Errors
    ///
    /// `GenerationOutOfRange` if `generation` reaches past the root.
    pub fn ancestor(&self, generation: usize) -> Result<Option<&'a Value>, JsonPointerError> {
        if generation >= self.nodes.len() {
            return Err(JsonPointerError::GenerationOutOfRange {
                generation,
                depth: self.nodes.len(),
            });
        }
        if !self.complete {
            return Ok(None);
        }
        Ok(Some(self.nodes[self.nodes.len() - 1 - generation]))
    }
}
