use crate::Matrix;

/// Largest entrywise difference between two matrices of the same shape.
pub(crate) fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    (a - b).mapv(f64::abs).into_iter().fold(0.0, f64::max)
}
