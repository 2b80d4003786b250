//! Dense matrix decompositions.
//!
//! This module provides:
//! - `Eigen`: iterated-QR eigendecomposition of symmetric matrices
//! - `Svd`: singular value decomposition, by one-sided Jacobi rotations
//!   (`SvdMethod::Jacobi`, the default) or through the eigendecomposition of
//!   the Gram matrix (`SvdMethod::Eigen`)
//!
//! # Examples
//!
//! ## Eigendecomposition
//! ```rust
//! use matdecomp::Eigen;
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 2.0, 3.0],
//!     [2.0, 5.0, 6.0],
//!     [3.0, 6.0, 10.0]
//! ];
//!
//! let result = Eigen::new().decompose(&x).unwrap();
//! assert!(result.converged());
//!
//! // vectors * diag(values) * vectorsᵀ recovers the input
//! let diff = &result.reconstruct() - &x;
//! assert!(diff.iter().all(|d| d.abs() < 1e-6));
//! ```
//!
//! ## Singular value decomposition
//! ```rust
//! use matdecomp::{Svd, SvdMethod};
//! use ndarray::array;
//!
//! let x = array![
//!     [4.0, 1.0, 2.0],
//!     [0.0, 3.0, 1.0]
//! ];
//!
//! let method: SvdMethod = "eigen".parse().unwrap();
//! let result = Svd::new().method(method).decompose(&x).unwrap();
//!
//! // Singular values come out largest first
//! assert!(result.d[0] >= result.d[1]);
//! ```

mod gram;
mod jacobi;
mod singular_value;
mod symmetric_eigen;

pub use singular_value::{Svd, SvdMethod, SvdResult};
pub use symmetric_eigen::{Eigen, EigenResult};

use crate::Matrix;
use crate::error::{LinalgError, Result};

/// Eigendecomposition of a symmetric matrix with default settings.
pub fn eigen(x: &Matrix) -> Result<EigenResult> {
    Eigen::new().decompose(x)
}

/// Singular value decomposition with default tolerance and iteration limit.
pub fn svd(x: &Matrix, method: SvdMethod) -> Result<SvdResult> {
    Svd::new().method(method).decompose(x)
}

fn validate_matrix(x: &Matrix) -> Result<()> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(LinalgError::InvalidInput(
            "matrix must have at least one row and one column".to_string(),
        ));
    }
    if x.iter().any(|value| !value.is_finite()) {
        return Err(LinalgError::InvalidInput(
            "matrix entries must be finite".to_string(),
        ));
    }
    Ok(())
}
