//! Python bindings for carray.
//!
//! The native extension is `carray._carray`, re-exported by the `carray`
//! package under `python/`. It exposes the `carray` class,
//! a typed growable array selected by typecode (`'i'` for C long, `'d'`
//! for C double), and the module-level `binary_search` helper.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use pyo3::prelude::*;

mod array;
mod convert;
mod error;
mod ops;
mod search;

/// The native `_carray` extension module.
#[pymodule]
fn _carray(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<array::PyCarray>()?;

    // Functions
    m.add_function(wrap_pyfunction!(search::binary_search, m)?)?;

    Ok(())
}
