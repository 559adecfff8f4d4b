//! Error types for carray.
//!
//! Every fallible array operation reports one of the [`ArrayError`]
//! variants synchronously. Validation and bounds checks always run before
//! any buffer change, so an `Err` never leaves an array partially mutated.
//! Allocation failure is not represented here: it aborts at the point of
//! allocation.

use std::error::Error;
use std::fmt;

use crate::kind::ElementKind;

/// Taxonomy class of an [`ArrayError`].
///
/// Host adapters map classes, not individual variants, onto their own
/// exception types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// A value does not fit the array's element kind.
    Range,
    /// A resolved index lies outside the valid window.
    Index,
    /// Construction was given an unusable selector or source.
    Value,
}

/// Errors from array construction and mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A candidate value failed validation for the element kind.
    OutOfRange {
        /// The kind the value was checked against.
        kind: ElementKind,
        /// Rendering of the rejected value.
        value: String,
    },
    /// A resolved index is outside `[0, len)`.
    IndexOutOfBounds {
        /// The index as supplied by the caller, before resolution.
        index: isize,
        /// Array length at the time of the access.
        len: usize,
    },
    /// The type-selector code does not name an element kind.
    UnknownTypecode {
        /// The unrecognised code.
        code: char,
    },
    /// The construction source cannot be sized or iterated.
    InvalidSource {
        /// What was wrong with the source.
        reason: String,
    },
}

impl ArrayError {
    /// Shorthand for an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(kind: ElementKind, value: impl fmt::Display) -> Self {
        Self::OutOfRange {
            kind,
            value: value.to_string(),
        }
    }

    /// The taxonomy class of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::OutOfRange { .. } => ErrorClass::Range,
            Self::IndexOutOfBounds { .. } => ErrorClass::Index,
            Self::UnknownTypecode { .. } | Self::InvalidSource { .. } => ErrorClass::Value,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { kind, value } => match kind {
                ElementKind::Integer => {
                    write!(f, "value {value} is not a 64-bit signed integer")
                }
                ElementKind::Float => {
                    write!(f, "value {value} is not a finite 64-bit float")
                }
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::UnknownTypecode { code } => {
                write!(f, "incorrect data type {code:?}: expected 'i' or 'd'")
            }
            Self::InvalidSource { reason } => write!(f, "invalid source: {reason}"),
        }
    }
}

impl Error for ArrayError {}
