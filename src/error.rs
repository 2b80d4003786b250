use std::fmt;

/// Errors raised by the decomposition routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinalgError {
    /// The matrix handed to a routine violates its preconditions
    /// (empty, non-finite, non-square or asymmetric).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value was not recognised.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The Jacobi sweeps hit the iteration ceiling before the columns
    /// became orthogonal.
    #[error(
        "Jacobi SVD did not converge after {sweeps} sweeps (largest column cosine {residual:e})"
    )]
    Convergence { sweeps: usize, residual: f64 },
}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Non-fatal outcome of an eigensolve that ran out of iterations.
///
/// The accompanying result still holds the last iterate; its eigenvalues
/// are approximate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceWarning {
    pub iterations: usize,
    /// Largest absolute strictly-lower-triangular entry of the last iterate.
    pub residual: f64,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QR iteration stopped after {} iterations with residual {:e}",
            self.iterations, self.residual
        )
    }
}
