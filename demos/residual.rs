use dokla::{DenseVector, SparseMatrix, alpha_char_pairs, keys_geq_threshold, residual_norm, spmv};

fn main() -> Result<(), dokla::LaError> {
    env_logger::init();

    // co-occurrence counts of letter pairs
    let mut pairs: SparseMatrix<char, char, u32> = SparseMatrix::new();
    for (a, b) in alpha_char_pairs("sparse matrix") {
        pairs.accumulate(a, b, 1);
    }
    print!("{pairs}");
    if let Some(row) = pairs.row(&'a') {
        let frequent: Vec<_> = keys_geq_threshold(row, 2).collect();
        println!("partners of 'a' seen at least twice: {frequent:?}");
    }

    // y = A x for a 1-D Laplacian, then the residual of a perturbed guess
    let n = 8;
    let mut a: SparseMatrix<usize, usize> = SparseMatrix::new();
    for i in 0..n {
        a.set(i, i, 2.0);
        if i > 0 {
            a.set(i, i - 1, -1.0);
        }
        if i + 1 < n {
            a.set(i, i + 1, -1.0);
        }
    }
    let x_true: DenseVector = (0..n).map(|i| i as f64).collect();
    let b = spmv(n, &a, &x_true)?;
    println!("b = {:?}", b.as_slice());

    let guess = x_true.add_scalar(0.01);
    println!("||b - A x|| = {:e}", residual_norm(&a, &guess, &b)?);
    Ok(())
}
