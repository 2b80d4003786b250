use matdecomp::{Eigen, LinalgError, column_norms, norm};
use ndarray::array;

fn main() -> Result<(), LinalgError> {
    println!("=== Symmetric Eigendecomposition Example ===\n");

    let x = array![
        [1.0, 2.0, 3.0],
        [2.0, 5.0, 6.0],
        [3.0, 6.0, 10.0]
    ];
    println!("X:\n{:.3}\n", x);

    let result = Eigen::new().decompose(&x)?;
    println!("Iterations: {}", result.iterations);
    println!("Eigenvalues: {:.6}", result.values);
    println!("Eigenvectors:\n{:.6}\n", result.vectors);

    // Frobenius norm: the length of the vector of column lengths
    let error = norm(&column_norms(&(&result.reconstruct() - &x)));
    println!("Reconstruction error (Frobenius): {:.2e}", error);

    // Equal-magnitude eigenvalues of opposite sign stall the unshifted iteration
    let swap = array![[0.0, 1.0], [1.0, 0.0]];
    let result = Eigen::new().max_iter(50).decompose(&swap)?;
    match result.warning {
        Some(warning) => println!("\nSwap matrix: {}", warning),
        None => println!("\nSwap matrix converged: {:.6}", result.values),
    }

    // Singular matrix, with and without its zero eigenvalue
    let singular = array![
        [2.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 5.0]
    ];
    let all = Eigen::new().decompose(&singular)?;
    let nonzero = Eigen::new().retain_zeroes(false).decompose(&singular)?;
    println!("\nAll eigenvalues: {}", all.values);
    println!("Non-zero eigenvalues: {}", nonzero.values);

    let asymmetric = array![[1.0, 2.0], [3.0, 4.0]];
    if let Err(e) = Eigen::new().decompose(&asymmetric) {
        println!("\nAsymmetric input rejected: {}", e);
    }

    Ok(())
}
