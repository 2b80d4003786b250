use crate::Matrix;
use crate::decomposition::singular_value::{SvdResult, descending_order, overflow_scale};
use crate::error::{LinalgError, Result};
use crate::norm::column_norms;
use log::{debug, trace};
use ndarray::Axis;

/// One-sided cyclic Jacobi SVD.
///
/// Plane rotations orthogonalize the columns of a copy of `x`; the same
/// rotations accumulated into the identity give `V`. Column lengths of the
/// rotated copy are the singular values, and the normalized columns are `U`.
/// Inputs with huge entries are rotated at a power-of-two scale so the
/// inner products cannot overflow.
pub(crate) fn jacobi_svd(x: &Matrix, tol: f64, max_iter: usize) -> Result<SvdResult> {
    let n = x.ncols();
    let scale = overflow_scale(x);
    let mut u = x / scale;
    let mut v = Matrix::eye(n);

    let mut sweeps = 0;
    let mut residual = 0.0_f64;
    let mut converged = false;

    while sweeps < max_iter {
        sweeps += 1;
        residual = 0.0;

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b, g) = {
                    let ui = u.column(i);
                    let uj = u.column(j);
                    (ui.dot(&ui), uj.dot(&uj), ui.dot(&uj))
                };

                if !(a.is_finite() && b.is_finite() && g.is_finite()) {
                    return Err(LinalgError::Convergence {
                        sweeps,
                        residual: f64::NAN,
                    });
                }
                // Numerically zero columns carry no direction to orthogonalize
                if a.sqrt() >= tol && b.sqrt() >= tol {
                    residual = residual.max(g.abs() / (a.sqrt() * b.sqrt()));
                }

                let t = if g.abs() > tol {
                    let z = (b - a) / (2.0 * g);
                    let sign = if z < 0.0 { -1.0 } else { 1.0 };
                    sign / (z.abs() + (1.0 + z * z).sqrt())
                } else {
                    0.0
                };
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = c * t;

                rotate_columns(&mut u, i, j, c, s);
                rotate_columns(&mut v, i, j, c, s);
            }
        }

        trace!("Jacobi sweep {}: largest column cosine {:e}", sweeps, residual);
        if residual < tol {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(LinalgError::Convergence { sweeps, residual });
    }
    debug!("Jacobi SVD converged after {} sweeps", sweeps);

    let d = column_norms(&u);
    for (mut column, &length) in u.columns_mut().into_iter().zip(d.iter()) {
        if length > 0.0 {
            column /= length;
        }
    }
    let d = d * scale;

    let order = descending_order(&d, tol);
    Ok(SvdResult {
        d: d.select(Axis(0), &order),
        u: u.select(Axis(1), &order),
        v: v.select(Axis(1), &order),
        warning: None,
    })
}

/// Rotate columns `i` and `j` of `m` in the plane they span.
///
/// Both new columns are built from the old pair, so the pair is copied
/// before either is overwritten.
fn rotate_columns(m: &mut Matrix, i: usize, j: usize, c: f64, s: f64) {
    let old_i = m.column(i).to_owned();
    let old_j = m.column(j).to_owned();
    m.column_mut(i).assign(&(c * &old_i - s * &old_j));
    m.column_mut(j).assign(&(s * &old_i + c * &old_j));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_tolerance;
    use crate::test_utils::max_abs_diff;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_rotate_columns_uses_old_values() {
        let mut m = array![[1.0, 2.0], [3.0, 4.0]];
        rotate_columns(&mut m, 0, 1, 0.0, 1.0);
        // c = 0, s = 1 swaps the columns and negates the first
        assert_eq!(m, array![[-2.0, 1.0], [-4.0, 3.0]]);
    }

    #[test]
    fn test_jacobi_symmetric() {
        let x = array![[1.0, 2.0, 3.0], [2.0, 5.0, 6.0], [3.0, 6.0, 10.0]];
        let result = jacobi_svd(&x, default_tolerance(), 100).unwrap();

        assert_eq!(result.d.len(), 3);
        assert_abs_diff_eq!(result.d[0], 14.933034373659, epsilon = 1e-6);
        assert_abs_diff_eq!(result.d[1], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.d[2], 0.066965626341, epsilon = 1e-6);
        assert!(max_abs_diff(&result.reconstruct(), &x) < 1e-8);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_jacobi_rectangular() {
        let tall = array![[2.0, 0.0], [0.0, 3.0], [1.0, 1.0]];
        let result = jacobi_svd(&tall, default_tolerance(), 100).unwrap();
        assert_eq!(result.u.shape(), &[3, 2]);
        assert_eq!(result.v.shape(), &[2, 2]);
        assert!(max_abs_diff(&result.reconstruct(), &tall) < 1e-8);

        let wide = array![[4.0, 1.0, 2.0], [0.0, 3.0, 1.0]];
        let result = jacobi_svd(&wide, default_tolerance(), 100).unwrap();
        assert_eq!(result.d.len(), 2);
        assert!(max_abs_diff(&result.reconstruct(), &wide) < 1e-8);
        assert!(max_abs_diff(&result.u.t().dot(&result.u), &Matrix::eye(2)) < 1e-8);
    }

    #[test]
    fn test_jacobi_orders_orthogonal_columns() {
        let x = array![[3.0, 0.0], [0.0, 4.0]];
        let result = jacobi_svd(&x, default_tolerance(), 100).unwrap();

        assert_eq!(result.d.to_vec(), vec![4.0, 3.0]);
        assert_eq!(result.v, array![[0.0, 1.0], [1.0, 0.0]]);
    }

    #[test]
    fn test_jacobi_rank_deficient() {
        let x = array![[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [4.0, 5.0, 7.0]];
        let result = jacobi_svd(&x, default_tolerance(), 100).unwrap();

        assert_eq!(result.rank(), 2);
        assert!(max_abs_diff(&result.reconstruct(), &x) < 1e-8);
    }

    #[test]
    fn test_jacobi_zero_matrix() {
        let x = Matrix::zeros((2, 2));
        let result = jacobi_svd(&x, default_tolerance(), 100).unwrap();
        assert_eq!(result.d.len(), 0);
    }

    #[test]
    fn test_jacobi_huge_entries() {
        let x = array![[1.0, 2.0], [3.0, 4.0]] * 1e160;
        let result = jacobi_svd(&x, default_tolerance(), 100).unwrap();

        assert_eq!(result.rank(), 2);
        assert_abs_diff_eq!(result.d[0] / 1e160, 5.464985704219043, epsilon = 1e-9);
        assert_abs_diff_eq!(result.d[1] / 1e160, 0.365966190626258, epsilon = 1e-9);
        assert!(max_abs_diff(&result.reconstruct(), &x) / 1e160 < 1e-10);
        assert!(max_abs_diff(&result.u.t().dot(&result.u), &Matrix::eye(2)) < 1e-10);
    }

    #[test]
    fn test_jacobi_non_finite_is_not_converged() {
        let x = array![[f64::NAN, 1.0], [1.0, 2.0]];
        let err = jacobi_svd(&x, default_tolerance(), 100).unwrap_err();
        match err {
            LinalgError::Convergence { sweeps, residual } => {
                assert_eq!(sweeps, 1);
                assert!(residual.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_jacobi_keeps_small_singular_value() {
        // rotation * diag(1, 1e-5) * rotationᵀ
        let rotation = array![[0.6, -0.8], [0.8, 0.6]];
        let x = (&rotation * &array![1.0, 1e-5]).dot(&rotation.t());
        let result = jacobi_svd(&x, default_tolerance(), 100).unwrap();

        assert_eq!(result.rank(), 2);
        assert_abs_diff_eq!(result.d[1], 1e-5, epsilon = 1e-9);
        assert!(max_abs_diff(&result.reconstruct(), &x) < 1e-12);
    }

    #[test]
    fn test_jacobi_zero_sweeps_fails() {
        let x = array![[4.0, 1.0], [1.0, 3.0]];
        let err = jacobi_svd(&x, default_tolerance(), 0).unwrap_err();
        assert_eq!(err, LinalgError::Convergence { sweeps: 0, residual: 0.0 });
    }

    #[test]
    fn test_jacobi_single_sweep_not_enough() {
        let x = array![[1.0, 2.0, 3.0], [2.0, 5.0, 6.0], [3.0, 6.0, 10.0]];
        let err = jacobi_svd(&x, default_tolerance(), 1).unwrap_err();
        assert!(matches!(err, LinalgError::Convergence { sweeps: 1, .. }));
    }
}
