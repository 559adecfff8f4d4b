//! ArrayError -> Python exception mapping.

use std::fmt;

use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError};
use pyo3::PyErr;

use carray_core::{ArrayError, ElementKind, ErrorClass};

/// Python exception type raised for an array failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExceptionKind {
    TypeError,
    IndexError,
    ValueError,
}

/// Pick the Python exception for an [`ArrayError`].
///
/// Values that do not fit the element kind raise `TypeError`, as does a
/// construction source that cannot be sized. Only an unknown typecode
/// raises `ValueError`.
pub(crate) fn exception_kind(err: &ArrayError) -> ExceptionKind {
    match (err, err.class()) {
        (ArrayError::InvalidSource { .. }, _) => ExceptionKind::TypeError,
        (_, ErrorClass::Range) => ExceptionKind::TypeError,
        (_, ErrorClass::Index) => ExceptionKind::IndexError,
        (_, ErrorClass::Value) => ExceptionKind::ValueError,
    }
}

/// A failure at the Python boundary, before it becomes a `PyErr`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AdapterError {
    /// The array rejected the operation.
    Array(ArrayError),
    /// The value is not a Python number at all.
    NonNumeric(ElementKind),
    /// The typecode is not a one-character string.
    TypecodeLength,
}

impl AdapterError {
    /// Python exception type this failure raises.
    pub(crate) fn exception_kind(&self) -> ExceptionKind {
        match self {
            Self::Array(err) => exception_kind(err),
            Self::NonNumeric(_) | Self::TypecodeLength => ExceptionKind::TypeError,
        }
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(err) => write!(f, "{err}"),
            Self::NonNumeric(kind) => f.write_str(non_numeric_message(*kind)),
            Self::TypecodeLength => f.write_str("typecode must be a string of length 1"),
        }
    }
}

impl From<ArrayError> for AdapterError {
    fn from(err: ArrayError) -> Self {
        Self::Array(err)
    }
}

impl From<AdapterError> for PyErr {
    fn from(err: AdapterError) -> Self {
        let msg = err.to_string();
        match err.exception_kind() {
            ExceptionKind::TypeError => PyTypeError::new_err(msg),
            ExceptionKind::IndexError => PyIndexError::new_err(msg),
            ExceptionKind::ValueError => PyValueError::new_err(msg),
        }
    }
}

/// Message for a value that is not a Python number at all.
pub(crate) fn non_numeric_message(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Integer => "value must be an int",
        ElementKind::Float => "value must be an int or float",
    }
}
