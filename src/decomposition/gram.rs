use crate::Matrix;
use crate::decomposition::singular_value::{SvdResult, descending_order, overflow_scale};
use crate::decomposition::symmetric_eigen::Eigen;
use crate::error::Result;
use ndarray::Axis;

/// SVD through the eigendecomposition of `XᵀX`.
///
/// `V` holds the eigenvectors and `d` the square roots of the eigenvalues;
/// `U = X V diag(1/d)`. Orthonormality of `U` rests entirely on the accuracy
/// of the eigenvectors, nothing re-orthogonalizes it. Inputs with huge
/// entries are decomposed at a power-of-two scale so `XᵀX` stays finite.
pub(crate) fn eigen_svd(x: &Matrix, tol: f64, max_iter: usize) -> Result<SvdResult> {
    let scale = overflow_scale(x);
    let scaled = x / scale;
    let gram = scaled.t().dot(&scaled);
    let gram = (&gram + &gram.t()) * 0.5;

    let eigen = Eigen::new()
        .tolerance(tol)
        .max_iter(max_iter)
        .retain_zeroes(false)
        .decompose(&gram)?;

    // Round-off can leave tiny negative eigenvalues
    let d = eigen.values.mapv(|value| value.max(0.0).sqrt());
    let order = descending_order(&(&d * scale), tol);
    let d = d.select(Axis(0), &order);
    let v = eigen.vectors.select(Axis(1), &order);
    let u = scaled.dot(&v) / &d;

    Ok(SvdResult {
        d: d * scale,
        u,
        v,
        warning: eigen.warning,
    })
}
