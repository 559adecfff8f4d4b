//! PyCarray: the Python `carray` class.
//!
//! A thin wrapper over [`Carray`]. Python values are read into
//! `Option<Scalar>` at the boundary; the `ops` functions decide the
//! outcome.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

use carray_array::Carray;

use crate::convert::{extract_scalar, scalar_into_py, HostSequence};
use crate::error::AdapterError;
use crate::ops;

/// A typed growable array of C longs (`'i'`) or C doubles (`'d'`).
///
/// Construct with ``carray(typecode, iterable=None)``. The iterable must
/// support ``len()``.
#[pyclass(name = "carray", module = "carray")]
pub(crate) struct PyCarray {
    inner: Carray,
}

#[pymethods]
impl PyCarray {
    /// Create an array of the given typecode, optionally filled from a
    /// sized iterable.
    ///
    /// Raises:
    ///     ValueError: If the typecode is not 'i' or 'd'.
    ///     TypeError: If the iterable has no length, or an element does
    ///         not fit the typecode.
    #[new]
    #[pyo3(signature = (typecode, iterable=None))]
    fn new(typecode: &Bound<'_, PyAny>, iterable: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let text: String = typecode
            .extract()
            .map_err(|_| PyTypeError::new_err("typecode must be a str"))?;
        let kind = ops::parse_typecode(&text)?;
        let Some(source) = iterable else {
            return Ok(Self {
                inner: Carray::new(kind),
            });
        };
        let items = match source.len() {
            Ok(len) => {
                let mut items = Vec::with_capacity(len);
                for item in source.try_iter()? {
                    items.push(extract_scalar(&item?)?);
                }
                Some(items)
            }
            Err(_) => None,
        };
        let inner = ops::build(kind, items)?;
        Ok(Self { inner })
    }

    /// The typecode the array was created with.
    #[getter]
    fn typecode(&self) -> String {
        self.inner.typecode().to_string()
    }

    /// Size of one element in bytes.
    #[getter]
    fn itemsize(&self) -> usize {
        self.inner.kind().element_size()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __getitem__(&self, py: Python<'_>, index: isize) -> PyResult<Py<PyAny>> {
        let value = self.inner.get(index).map_err(AdapterError::from)?;
        scalar_into_py(py, value)
    }

    fn __setitem__(&mut self, index: isize, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let value = extract_scalar(value)?;
        Ok(ops::assign(&mut self.inner, index, value)?)
    }

    fn __iter__(mut slf: PyRefMut<'_, Self>) -> PyRefMut<'_, Self> {
        slf.inner.rewind();
        slf
    }

    fn __next__(&mut self, py: Python<'_>) -> PyResult<Option<Py<PyAny>>> {
        self.inner
            .advance()
            .map(|value| scalar_into_py(py, value))
            .transpose()
    }

    fn __eq__(&self, other: &Bound<'_, PyAny>) -> bool {
        if let Ok(other) = other.cast::<PyCarray>() {
            return match other.try_borrow() {
                Ok(other) => self.inner.equals(&other.inner),
                // Comparing an array against itself while it is borrowed mutably.
                Err(_) => false,
            };
        }
        ops::equals(&self.inner, HostSequence::new(other))
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    /// Bytes of element storage: capacity times item size.
    fn __sizeof__(&self) -> usize {
        self.inner.storage_footprint()
    }

    /// A new array with the same typecode and capacity, elements reversed.
    fn __reversed__(&self) -> Self {
        Self {
            inner: self.inner.reversed_copy(),
        }
    }

    /// Append a value to the end.
    fn append(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let value = extract_scalar(value)?;
        Ok(ops::append(&mut self.inner, value)?)
    }

    /// Insert a value before `index`. Out-of-range indices insert at
    /// the nearest end.
    fn insert(&mut self, index: isize, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let value = extract_scalar(value)?;
        Ok(ops::insert(&mut self.inner, index, value)?)
    }

    /// Remove and return the element at `index` (default last).
    ///
    /// Raises:
    ///     IndexError: If the array is empty or `index` is out of range.
    #[pyo3(signature = (index=-1))]
    fn pop(&mut self, py: Python<'_>, index: isize) -> PyResult<Py<PyAny>> {
        let value = self.inner.remove_at(index).map_err(AdapterError::from)?;
        scalar_into_py(py, value)
    }

    /// Remove the first element equal to `value`.
    ///
    /// Does nothing if no element matches or `value` is not a number.
    fn remove(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let value = extract_scalar(value)?;
        ops::remove(&mut self.inner, value);
        Ok(())
    }
}
