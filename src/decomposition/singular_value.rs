use crate::decomposition::gram::eigen_svd;
use crate::decomposition::jacobi::jacobi_svd;
use crate::decomposition::validate_matrix;
use crate::error::{ConvergenceWarning, LinalgError, Result};
use crate::{DEFAULT_MAX_ITER, Matrix, Vector, default_tolerance};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Singular value decomposition `X = U * diag(d) * Vᵀ`.
#[derive(Clone, Debug)]
pub struct SvdResult {
    /// Non-zero singular values, largest first.
    pub d: Vector,
    /// Left singular vectors, one column per entry of `d`.
    pub u: Matrix,
    /// Right singular vectors, one column per entry of `d`.
    pub v: Matrix,
    /// Only set by [`SvdMethod::Eigen`] when its eigensolve stopped early.
    pub warning: Option<ConvergenceWarning>,
}

impl SvdResult {
    pub fn rank(&self) -> usize {
        self.d.len()
    }

    pub fn reconstruct(&self) -> Matrix {
        (&self.u * &self.d).dot(&self.v.t())
    }
}

/// Column order that sorts `d` descending and drops entries below `tol`.
pub(crate) fn descending_order(d: &Vector, tol: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..d.len()).collect();
    order.sort_by(|&a, &b| d[b].partial_cmp(&d[a]).unwrap_or(Ordering::Equal));
    order.retain(|&k| d[k].abs() >= tol);
    order
}

/// Power of two that `x` is divided by before a decomposition.
///
/// Squared column lengths and Gram entries stay finite for `x / scale`.
/// The scale is `1.0` unless the largest entry reaches
/// `sqrt(f64::MAX / (rows * cols))`.
pub(crate) fn overflow_scale(x: &Matrix) -> f64 {
    let (m, n) = x.dim();
    let largest = x.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
    let limit = (f64::MAX / (m * n) as f64).sqrt();
    if largest < limit {
        1.0
    } else {
        // log2 of f64::MAX rounds up to 1024
        let exponent = (largest.log2().floor() as i32).min(f64::MAX_EXP - 1);
        2.0_f64.powi(exponent)
    }
}

/// Algorithm used by [`Svd`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SvdMethod {
    /// One-sided cyclic Jacobi rotations.
    #[default]
    Jacobi,
    /// Eigendecomposition of the Gram matrix `XᵀX`.
    Eigen,
}

impl FromStr for SvdMethod {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jacobi" => Ok(SvdMethod::Jacobi),
            "eigen" => Ok(SvdMethod::Eigen),
            _ => Err(LinalgError::InvalidArgument(format!(
                "unknown SVD method: {}. Must be one of: jacobi, eigen",
                s
            ))),
        }
    }
}

impl fmt::Display for SvdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvdMethod::Jacobi => write!(f, "jacobi"),
            SvdMethod::Eigen => write!(f, "eigen"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Svd {
    method: SvdMethod,
    tolerance: f64,
    max_iter: usize,
}

impl Svd {
    pub fn new() -> Self {
        Self {
            method: SvdMethod::default(),
            tolerance: default_tolerance(),
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    pub fn method(mut self, method: SvdMethod) -> Self {
        self.method = method;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sweep limit for Jacobi, QR iteration limit for the eigen method.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn decompose(&self, x: &Matrix) -> Result<SvdResult> {
        validate_matrix(x)?;
        match self.method {
            SvdMethod::Jacobi => jacobi_svd(x, self.tolerance, self.max_iter),
            SvdMethod::Eigen => eigen_svd(x, self.tolerance, self.max_iter),
        }
    }
}

impl Default for Svd {
    fn default() -> Self {
        Self::new()
    }
}
