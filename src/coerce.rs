//! Element coercion to `f64`.
//!
//! [`Real`] decides whether a single input element can be read as a real
//! number. The accepted inputs mirror what NumPy's `asarray(x, dtype=float)`
//! accepts for 1-D data: every numeric primitive, booleans, numeric strings,
//! and JSON scalars.

use std::fmt;

use ndarray::Array1;
use serde_json::Value;

use crate::error::NormError;
use crate::Vector;

/// An element that may be interpreted as a real number.
pub trait Real: fmt::Debug {
    /// Returns the element as `f64`, or `None` when it is not numeric.
    fn to_real(&self) -> Option<f64>;
}

macro_rules! impl_real_as {
    ($($t:ty),* $(,)?) => {
        $(
            impl Real for $t {
                #[inline]
                fn to_real(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_real_as!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Real for bool {
    fn to_real(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

impl Real for str {
    fn to_real(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl Real for String {
    fn to_real(&self) -> Option<f64> {
        self.as_str().to_real()
    }
}

impl Real for Value {
    fn to_real(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            Value::Bool(b) => b.to_real(),
            Value::String(s) => s.to_real(),
            Value::Null => Some(f64::NAN),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl<T: Real + ?Sized> Real for &T {
    #[inline]
    fn to_real(&self) -> Option<f64> {
        (**self).to_real()
    }
}

/// Convert an array-like input into a float [`Vector`].
///
/// Fails on the first element that is not a real number.
pub fn to_vector<I>(x: I) -> Result<Vector, NormError>
where
    I: IntoIterator,
    I::Item: Real,
{
    x.into_iter()
        .enumerate()
        .map(|(index, e)| {
            e.to_real().ok_or_else(|| NormError::NonNumeric {
                index,
                value: format!("{:?}", e),
            })
        })
        .collect::<Result<Vec<f64>, NormError>>()
        .map(Array1::from)
}
