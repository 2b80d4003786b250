use crate::decomposition::validate_matrix;
use crate::error::{ConvergenceWarning, LinalgError, Result};
use crate::qr::{Householder, QrDecomposition, QrFactorize};
use crate::{DEFAULT_MAX_ITER, Matrix, Vector, default_tolerance};
use log::{debug, trace, warn};
use ndarray::{Axis, Zip};

/// Eigendecomposition of a real symmetric matrix.
#[derive(Clone, Debug)]
pub struct EigenResult {
    /// Eigenvalues in the order the iteration left them on the diagonal.
    pub values: Vector,
    /// Unit eigenvectors; column `i` pairs with `values[i]`.
    pub vectors: Matrix,
    pub iterations: usize,
    /// Set when the iteration ceiling was reached first.
    pub warning: Option<ConvergenceWarning>,
}

impl EigenResult {
    pub fn converged(&self) -> bool {
        self.warning.is_none()
    }

    /// `vectors * diag(values) * vectorsᵀ`
    pub fn reconstruct(&self) -> Matrix {
        (&self.vectors * &self.values).dot(&self.vectors.t())
    }
}

/// Iterated-QR eigensolver for symmetric matrices.
///
/// Each step factors the working matrix as `Q R` and replaces it with
/// `R Q`, a similarity transform that drives it towards diagonal form.
/// The product of the `Q` factors holds the eigenvectors.
#[derive(Clone, Debug)]
pub struct Eigen<F = Householder> {
    tolerance: f64,
    max_iter: usize,
    retain_zeroes: bool,
    factorizer: F,
}

impl Eigen {
    pub fn new() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iter: DEFAULT_MAX_ITER,
            retain_zeroes: true,
            factorizer: Householder,
        }
    }
}

impl Default for Eigen {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: QrFactorize> Eigen<F> {
    /// Swap in another QR strategy.
    pub fn with_factorizer<G: QrFactorize>(self, factorizer: G) -> Eigen<G> {
        Eigen {
            tolerance: self.tolerance,
            max_iter: self.max_iter,
            retain_zeroes: self.retain_zeroes,
            factorizer,
        }
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Keep eigenpairs whose eigenvalue is exactly zero (default `true`).
    pub fn retain_zeroes(mut self, retain_zeroes: bool) -> Self {
        self.retain_zeroes = retain_zeroes;
        self
    }

    pub fn decompose(&self, x: &Matrix) -> Result<EigenResult> {
        validate_matrix(x)?;
        if !x.is_square() {
            return Err(LinalgError::InvalidInput(format!(
                "matrix must be square, got {}x{}",
                x.nrows(),
                x.ncols()
            )));
        }
        let tol = self.tolerance;
        if !Zip::from(x).and(&x.t()).all(|&a, &b| (a - b).abs() <= tol) {
            return Err(LinalgError::InvalidInput(
                "matrix must be symmetric".to_string(),
            ));
        }

        let mut vectors = Matrix::eye(x.nrows());
        let mut working = x.to_owned();
        let mut residual = max_below_diagonal(&working);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            let QrDecomposition { q, r, .. } = self.factorizer.factorize(&working, tol);
            vectors = vectors.dot(&q);
            working = r.dot(&q);
            iterations += 1;

            residual = max_below_diagonal(&working);
            trace!("QR iteration {}: residual {:e}", iterations, residual);
            if residual <= tol {
                converged = true;
                break;
            }
        }

        let warning = if converged {
            debug!("QR iteration converged after {} iterations", iterations);
            None
        } else {
            let warning = ConvergenceWarning { iterations, residual };
            warn!("{}", warning);
            Some(warning)
        };

        let values = working.diag().to_owned();
        let (values, vectors) = if self.retain_zeroes {
            (values, vectors)
        } else {
            let keep: Vec<usize> = values
                .iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0.0)
                .map(|(i, _)| i)
                .collect();
            (values.select(Axis(0), &keep), vectors.select(Axis(1), &keep))
        };

        Ok(EigenResult {
            values,
            vectors,
            iterations,
            warning,
        })
    }
}

fn max_below_diagonal(x: &Matrix) -> f64 {
    x.indexed_iter()
        .filter(|((i, j), _)| j < i)
        .map(|(_, value)| value.abs())
        .fold(0.0, f64::max)
}
