//! # unitnorm: L2 normalization of numeric vectors
//!
//! Scales a vector to unit Euclidean length while preserving its direction.
//!
//! ## Operations
//!
//! - [`normalize()`] - Coerce an array-like input to `f64` and normalize it
//! - [`normalize_array()`] - Infallible variant for numeric ndarrays
//! - [`normalize_rows()`] - Normalize each row of a matrix (parallel)
//!
//! ## Degenerate input
//!
//! A vector whose norm is exactly `0.0` (including the empty vector) is
//! returned unchanged, converted to `f64`. The zero test is exact: a norm
//! that is tiny but non-zero is still divided out.
//!
//! ```rust
//! use unitnorm::normalize;
//!
//! let y = normalize([1, 0, 0]).unwrap();
//! assert_eq!(y.to_vec(), vec![1.0, 0.0, 0.0]);
//! ```

#![deny(missing_docs)]

pub mod coerce;
pub mod error;
pub mod harness;
pub mod math;
pub mod normalize;

// Re-exports
pub use coerce::{to_vector, Real};
pub use error::NormError;
pub use math::{l2_norm, l2_norm_sq};
pub use normalize::{normalize, normalize_array, normalize_rows, Vector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Python bindings via PyO3
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
    use pyo3::prelude::*;

    use crate::{NormError, Real};

    fn norm_err(e: NormError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
    }

    fn item_to_real(item: &PyAny) -> Option<f64> {
        if item.is_none() {
            Some(f64::NAN)
        } else if let Ok(s) = item.extract::<&str>() {
            s.to_real()
        } else {
            item.extract::<f64>().ok()
        }
    }

    /// L2-normalize a sequence or 1-D float array, returning a float64 ndarray.
    #[pyfunction]
    #[pyo3(name = "normalize")]
    fn py_normalize<'py>(py: Python<'py>, x: &'py PyAny) -> PyResult<&'py PyArray1<f64>> {
        if let Ok(arr) = x.extract::<PyReadonlyArray1<'py, f64>>() {
            return Ok(crate::normalize_array(&arr.as_array()).into_pyarray(py));
        }

        let mut values = Vec::new();
        for (index, item) in x.iter()?.enumerate() {
            let item = item?;
            match item_to_real(item) {
                Some(v) => values.push(v),
                None => {
                    let value = item.repr().map(|r| r.to_string()).unwrap_or_default();
                    return Err(norm_err(NormError::NonNumeric { index, value }));
                }
            }
        }

        let result = crate::normalize(values).map_err(norm_err)?;
        Ok(result.into_pyarray(py))
    }

    #[pymodule]
    fn _core(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
        m.add("__version__", crate::VERSION)?;
        Ok(())
    }
}
