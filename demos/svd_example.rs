use matdecomp::{Matrix, Svd, SvdMethod, column_norms, norm};
use ndarray::{Array2, array};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Singular Value Decomposition Comparison ===\n");

    let mut rng = StdRng::seed_from_u64(42);
    let x = Array2::random_using((6, 4), Uniform::new(-1.0, 1.0), &mut rng);
    println!("Random 6x4 matrix:\n{:.3}\n", x);
    println!("Column lengths: {:.4}\n", column_norms(&x));

    for name in ["jacobi", "eigen"] {
        let method: SvdMethod = name.parse()?;
        match Svd::new().method(method).decompose(&x) {
            Ok(result) => {
                println!("Method: {}", method);
                println!("  Singular values: {:.6}", result.d);
                let residual = &result.reconstruct() - &x;
                let drift = &result.u.t().dot(&result.u) - &Matrix::eye(result.rank());
                println!("  Reconstruction error: {:.2e}", norm(&column_norms(&residual)));
                println!("  Orthogonality error of U: {:.2e}", norm(&column_norms(&drift)));
                if let Some(warning) = result.warning {
                    println!("  Warning: {}", warning);
                }
            }
            Err(e) => println!("Method {} failed: {}", method, e),
        }
    }

    println!("\n=== Rank-deficient input ===");
    let repeated = array![
        [1.0, 2.0, 3.0],
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 7.0]
    ];
    for method in [SvdMethod::Jacobi, SvdMethod::Eigen] {
        let result = Svd::new().method(method).decompose(&repeated)?;
        println!("{}: rank {} with d = {:.6}", method, result.rank(), result.d);
    }

    println!("\n=== Failure modes ===");
    if let Err(e) = "power".parse::<SvdMethod>() {
        println!("{}", e);
    }
    if let Err(e) = Svd::new().max_iter(1).decompose(&x) {
        println!("{}", e);
    }

    Ok(())
}
