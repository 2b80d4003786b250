//! Euclidean lengths of vectors and matrix columns.
//!
//! A vector is handled as a one-column matrix, so both entry points share
//! the same column-wise computation.

use crate::Vector;
use ndarray::{ArrayBase, Axis, Data, Ix1, Ix2};

/// Euclidean length of every column of `x`, in column order.
pub fn column_norms<S>(x: &ArrayBase<S, Ix2>) -> Vector
where
    S: Data<Elem = f64>,
{
    x.fold_axis(Axis(0), 0.0, |acc, &value| acc + value * value)
        .mapv_into(f64::sqrt)
}

/// Euclidean length of a vector.
pub fn norm<S>(v: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    column_norms(&v.view().insert_axis(Axis(1)))[0]
}
