//! Module-level `binary_search` over any sorted Python sequence.

use std::cmp::Ordering;

use pyo3::prelude::*;

use carray_core::binary_search_by;

/// Return the index of the first occurrence of `item` in the sorted
/// `sequence`, or None if it is absent.
///
/// Elements are compared with Python's own ``<=`` and ``!=``, so any
/// mutually comparable objects work. Comparison errors propagate.
#[pyfunction]
pub(crate) fn binary_search(
    sequence: &Bound<'_, PyAny>,
    item: &Bound<'_, PyAny>,
) -> PyResult<Option<usize>> {
    let len = sequence.len()?;
    binary_search_by(len, |i| {
        let element = sequence.get_item(i)?;
        Ok(if !item.le(&element)? {
            Ordering::Less
        } else if item.ne(&element)? {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    })
}
