//! Mathematical primitives for unitnorm.
//!
//! - [`norms`] — L2 norm computations

pub mod norms;

pub use norms::{l2_norm, l2_norm_sq, l2_norm_view};
