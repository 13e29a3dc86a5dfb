//! Lenient accessors that substitute a default for missing or mistyped values.
//!
//! These are for presentation. A default here looks exactly like a present
//! empty value, so use [`resolve`](crate::resolve) to test for presence.

use serde_json::{Map, Number, Value};

/// Coerce a JSON value, or the lack of one, into a concrete Rust value.
///
/// `null`, a missing value and a value of another type all yield the default.
///
/// ```
/// use json_pointer_deep::{resolve, LenientExt};
/// use serde_json::json;
///
/// let doc = json!({"name": "ringworld", "copies": 2000});
/// assert_eq!(resolve(&doc, "/name").safe_string(), "ringworld");
/// assert_eq!(resolve(&doc, "/copies").safe_string(), "");
/// assert_eq!(resolve(&doc, "/missing").string_or("n/a"), "n/a");
/// assert_eq!(resolve(&doc, "/copies").safe_number().as_u64(), Some(2000));
/// ```
pub trait LenientExt {
    fn lenient(&self) -> Option<&Value>;

    fn string_or(&self, default: &str) -> String {
        match self.lenient() {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    fn safe_string(&self) -> String {
        self.string_or("")
    }

    fn number_or(&self, default: Number) -> Number {
        match self.lenient() {
            Some(Value::Number(n)) => n.clone(),
            _ => default,
        }
    }

    fn safe_number(&self) -> Number {
        self.number_or(Number::from(0))
    }

    fn bool_or(&self, default: bool) -> bool {
        match self.lenient() {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    fn safe_bool(&self) -> bool {
        self.bool_or(false)
    }

    fn safe_object(&self) -> Map<String, Value> {
        match self.lenient() {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }

    fn safe_array(&self) -> Vec<Value> {
        match self.lenient() {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }
}

impl LenientExt for Value {
    fn lenient(&self) -> Option<&Value> {
        Some(self)
    }
}

impl LenientExt for Option<&Value> {
    fn lenient(&self) -> Option<&Value> {
        *self
    }
}
