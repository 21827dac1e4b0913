//! Norm computations for vectors.
//!
//! Provides the L2 (Euclidean) norm functions used by normalization.

use ndarray::ArrayView1;

/// Compute the L2 (Euclidean) norm of an f64 slice.
pub fn l2_norm(v: &[f64]) -> f64 {
    l2_norm_sq(v).sqrt()
}

/// Compute the squared L2 norm of an f64 slice (avoids sqrt).
pub fn l2_norm_sq(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Compute the L2 norm of a 1-D array view.
///
/// Works on strided views (e.g. columns of a row-major matrix) without
/// copying them into a contiguous buffer first.
pub fn l2_norm_view(v: ArrayView1<'_, f64>) -> f64 {
    match v.as_slice() {
        Some(s) => l2_norm(s),
        None => v.iter().map(|x| x * x).sum::<f64>().sqrt(),
    }
}
