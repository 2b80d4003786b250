pub use ndarray::{Array1, Array2};

pub mod decomposition;
pub mod error;
pub mod norm;
pub mod qr;

#[cfg(test)]
mod test_utils;

pub use decomposition::{Eigen, EigenResult, Svd, SvdMethod, SvdResult, eigen, svd};
pub use error::{ConvergenceWarning, LinalgError, Result};
pub use norm::{column_norms, norm};
pub use qr::{Householder, QrDecomposition, QrFactorize, qr};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

/// Iteration ceiling used when a caller does not set one.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Square root of machine epsilon, the default convergence threshold.
pub fn default_tolerance() -> f64 {
    f64::EPSILON.sqrt()
}
