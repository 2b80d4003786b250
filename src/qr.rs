//! QR factorization used by the iterated-QR eigensolver.
//!
//! Factors `X (m × n)` as `X = Q R` with `Q` an `m × m` orthogonal matrix and
//! `R` an `m × n` upper-triangular matrix. Entries of `R` at round-off
//! level, `max(m, n) * ε * max|R|`, are flushed to exactly zero, so a
//! rank-deficient input yields exact zero rows in `R`. The caller's
//! tolerance only caps that floor.

use crate::norm::norm;
use crate::{Matrix, Vector};
use ndarray::{Axis, s};

#[derive(Clone, Debug)]
pub struct QrDecomposition {
    pub q: Matrix,
    pub r: Matrix,
    /// Number of non-zero rows of `r`.
    pub rank: usize,
}

/// A QR factorization strategy.
///
/// Implementations must be deterministic and return `Q` orthogonal and `R`
/// upper triangular with `Q * R` equal to the input within `tol`.
pub trait QrFactorize {
    fn factorize(&self, x: &Matrix, tol: f64) -> QrDecomposition;
}

/// Householder reflections, one per column.
#[derive(Clone, Copy, Debug, Default)]
pub struct Householder;

impl QrFactorize for Householder {
    fn factorize(&self, x: &Matrix, tol: f64) -> QrDecomposition {
        let (m, n) = x.dim();
        let mut q = Matrix::eye(m);
        let mut r = x.to_owned();

        for k in 0..n.min(m.saturating_sub(1)) {
            let mut v = r.slice(s![k.., k]).to_owned();
            let length = norm(&v);
            if length == 0.0 {
                continue;
            }

            // Reflect onto -sign(x0) * |x| e1 to avoid cancellation
            let alpha = if v[0] < 0.0 { length } else { -length };
            v[0] -= alpha;
            let v_length = norm(&v);
            if v_length == 0.0 {
                continue;
            }
            v /= v_length;

            let mut lower = r.slice_mut(s![k.., ..]);
            let projection = v.dot(&lower);
            lower.scaled_add(-2.0, &outer(&v, &projection));

            let mut trailing = q.slice_mut(s![.., k..]);
            let image = trailing.dot(&v);
            trailing.scaled_add(-2.0, &outer(&image, &v));
        }

        let floor = round_off_floor(&r).min(tol);
        for ((i, j), value) in r.indexed_iter_mut() {
            if j < i || value.abs() <= floor {
                *value = 0.0;
            }
        }
        let rank = r
            .rows()
            .into_iter()
            .filter(|row| row.iter().any(|&value| value != 0.0))
            .count();

        QrDecomposition { q, r, rank }
    }
}

/// Factor `x` with Householder reflections.
pub fn qr(x: &Matrix, tol: f64) -> QrDecomposition {
    Householder.factorize(x, tol)
}

/// Size of the error Householder reflections leave in `R`.
fn round_off_floor(r: &Matrix) -> f64 {
    let (m, n) = r.dim();
    let scale = r
        .indexed_iter()
        .filter(|((i, j), _)| j >= i)
        .map(|(_, value)| value.abs())
        .fold(0.0, f64::max);
    m.max(n) as f64 * f64::EPSILON * scale
}

fn outer(a: &Vector, b: &Vector) -> Matrix {
    a.view()
        .insert_axis(Axis(1))
        .dot(&b.view().insert_axis(Axis(0)))
}
