//! Limits for pointers that arrive from untrusted input.
//!
//! [`resolve`](crate::resolve) and [`set`](crate::set) accept any pointer.
//! `set` grows arrays up to the index it is given, so a caller reading
//! pointers from the outside should check them here first.

use thiserror::Error;

use crate::util::parse_index;

/// Longest pointer accepted, in bytes.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Most segments a pointer may have.
pub const MAX_SEGMENTS: usize = 256;

/// Largest array index a pointer may name.
pub const MAX_ARRAY_INDEX: usize = 1 << 16;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("POINTER_TOO_DEEP: more than 256 segments")]
    TooManySegments,
    #[error("INDEX_TOO_LARGE: segment {segment} exceeds 65536")]
    IndexTooLarge { segment: usize },
}

/// Check a pointer against the limits above.
///
/// A digit run too long for `usize` counts as too large rather than as an
/// object key.
///
/// # Errors
///
/// - `PointerInvalid` for a non-empty pointer without a leading `/`.
/// - `PointerTooLong` past [`MAX_POINTER_LENGTH`] bytes.
/// - `TooManySegments` past [`MAX_SEGMENTS`] segments.
/// - `IndexTooLarge` with the zero-based position of the first index segment
///   above [`MAX_ARRAY_INDEX`].
///
/// ```
/// use json_pointer_deep::{validate_json_pointer, ValidationError};
///
/// assert!(validate_json_pointer("").is_ok());
/// assert!(validate_json_pointer("/items/65536").is_ok());
/// assert_eq!(
///     validate_json_pointer("/items/65537"),
///     Err(ValidationError::IndexTooLarge { segment: 1 })
/// );
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    let Some(rest) = pointer.strip_prefix('/') else {
        return if pointer.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::PointerInvalid)
        };
    };
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(ValidationError::PointerTooLong);
    }
    for (segment, raw) in rest.split('/').enumerate() {
        if segment >= MAX_SEGMENTS {
            return Err(ValidationError::TooManySegments);
        }
        if index_too_large(raw) {
            return Err(ValidationError::IndexTooLarge { segment });
        }
    }
    Ok(())
}

fn index_too_large(raw: &str) -> bool {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    parse_index(digits).map_or(true, |idx| idx > MAX_ARRAY_INDEX)
}
