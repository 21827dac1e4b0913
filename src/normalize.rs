//! L2 normalization.
//!
//! Scales a vector to unit Euclidean length. A vector whose norm is exactly
//! `0.0` has no direction and is returned as-is (converted to `f64`); there
//! is no epsilon band, so a tiny but non-zero norm is still divided out.

use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1};
use rayon::prelude::*;

use crate::coerce::{to_vector, Real};
use crate::error::NormError;
use crate::math::norms::l2_norm_view;

/// Floating-point vector produced by normalization.
pub type Vector = Array1<f64>;

/// L2-normalize an array-like numeric vector.
///
/// Elements are converted to `f64` first (see [`Real`]). Returns the unit
/// vector, or the converted input unchanged when its norm is exactly zero
/// (this includes the empty vector).
///
/// # Errors
///
/// [`NormError::NonNumeric`] if an element cannot be read as a real number.
///
/// # Example
///
/// ```rust
/// use unitnorm::normalize;
///
/// let v = normalize([3, 4]).unwrap();
/// assert!((v[0] - 0.6).abs() < 1e-12);
/// assert!((v[1] - 0.8).abs() < 1e-12);
///
/// let zero = normalize([0.0, 0.0]).unwrap();
/// assert_eq!(zero.to_vec(), vec![0.0, 0.0]);
/// ```
pub fn normalize<I>(x: I) -> Result<Vector, NormError>
where
    I: IntoIterator,
    I::Item: Real,
{
    let v = to_vector(x)?;
    Ok(scale_to_unit(v))
}

/// L2-normalize a 1-D array whose elements widen losslessly to `f64`.
///
/// Same contract as [`normalize`], without the fallible coercion step.
pub fn normalize_array<S, A>(x: &ArrayBase<S, Ix1>) -> Vector
where
    S: Data<Elem = A>,
    A: Copy + Into<f64>,
{
    scale_to_unit(x.mapv(Into::into))
}

/// L2-normalize every row of a 2-D array independently.
///
/// Rows with zero norm are left at zero. Rows are processed in parallel.
pub fn normalize_rows<T>(x: &Array2<T>) -> Array2<f64>
where
    T: Copy + Into<f64>,
{
    let mut out: Array2<f64> = x.mapv(Into::into);

    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .for_each(|mut row| {
            let norm = l2_norm_view(row.view());
            if norm != 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        });

    out
}

fn scale_to_unit(v: Vector) -> Vector {
    let norm = l2_norm_view(v.view());
    if norm == 0.0 {
        return v;
    }
    v / norm
}
