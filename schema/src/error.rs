//! Field codec errors.

use std::fmt;

use crate::FieldId;

/// Result type for field operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when decoding or encoding a misc field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The field extends past the end of the slot buffer.
    SlotOutOfBounds {
        field: FieldId,
        slot: usize,
        len: usize,
    },

    /// The value variant does not match the field's kind.
    TypeMismatch {
        field: FieldId,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotOutOfBounds { field, slot, len } => {
                write!(f, "field {field} at slot {slot} exceeds buffer of {len} slots")
            }
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => {
                write!(f, "field {field} expects {expected} but got {found}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
