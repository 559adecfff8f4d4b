//! Conversions between Python objects and [`Scalar`] values.

use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt};
use pyo3::IntoPyObjectExt;

use carray_core::{Scalar, ScalarSequence};

/// Read a Python number as a [`Scalar`].
///
/// Returns `Ok(None)` for anything that is neither an `int` (including
/// `bool`) nor a `float`.
pub(crate) fn extract_scalar(value: &Bound<'_, PyAny>) -> PyResult<Option<Scalar>> {
    if value.is_instance_of::<PyInt>() {
        if let Ok(v) = value.extract::<i128>() {
            return Ok(Some(Scalar::Int(v)));
        }
        let nearest = match value.extract::<f64>() {
            Ok(v) => Some(v),
            Err(err) if err.is_instance_of::<PyOverflowError>(value.py()) => None,
            Err(err) => return Err(err),
        };
        return Ok(Some(wide_int(nearest, value.lt(0)?)));
    }
    if value.is_instance_of::<PyFloat>() {
        return Ok(Some(Scalar::Float(value.extract::<f64>()?)));
    }
    Ok(None)
}

/// Scalar for an int too wide for `i128`.
///
/// `nearest` is the int's nearest double, or `None` when the int lies
/// beyond the double range. Either way the result is a float, which an
/// integer array rejects.
pub(crate) fn wide_int(nearest: Option<f64>, negative: bool) -> Scalar {
    match nearest {
        Some(v) => Scalar::Float(v),
        None if negative => Scalar::Float(f64::NEG_INFINITY),
        None => Scalar::Float(f64::INFINITY),
    }
}

/// Build the Python object for an element.
pub(crate) fn scalar_into_py(py: Python<'_>, value: Scalar) -> PyResult<Py<PyAny>> {
    match value {
        Scalar::Int(v) => v.into_py_any(py),
        Scalar::Float(v) => v.into_py_any(py),
    }
}

/// A Python sequence viewed through [`ScalarSequence`].
///
/// Items that cannot be fetched or are not numbers read as `None`, which
/// compares unequal to every array element.
pub(crate) struct HostSequence<'a, 'py> {
    obj: &'a Bound<'py, PyAny>,
    len: usize,
}

impl<'a, 'py> HostSequence<'a, 'py> {
    /// Wrap `obj` if it reports a length.
    pub(crate) fn new(obj: &'a Bound<'py, PyAny>) -> Option<Self> {
        obj.len().ok().map(|len| Self { obj, len })
    }
}

impl ScalarSequence for HostSequence<'_, '_> {
    fn len(&self) -> usize {
        self.len
    }

    fn scalar_at(&self, index: usize) -> Option<Scalar> {
        let item = self.obj.get_item(index).ok()?;
        extract_scalar(&item).ok().flatten()
    }
}
