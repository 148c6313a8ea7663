//! Property tests for the sparse matrix-vector product.
//!
//! This module checks `spmv` against the documented scenarios, against a dense faer
//! product on random sparse matrices, for linearity in `x`, and for visiting exactly
//! the stored entries of a matrix regardless of its declared size.

use std::cell::Cell;

use approx::assert_abs_diff_eq;
use dokla::{DenseVector, LaError, SparseMatrix, SparseRows, spmv};
use rand::Rng;

/// Helper building a random `n × n` sparse matrix with roughly `per_row` entries per row.
fn random_sparse(n: usize, per_row: usize) -> SparseMatrix<usize, usize> {
    let mut rng = rand::thread_rng();
    let mut a = SparseMatrix::new();
    for i in 0..n {
        for _ in 0..per_row {
            let j = rng.gen_range(0..n);
            a.set(i, j, rng.gen_range(-1.0..1.0));
        }
    }
    a
}

fn random_dense(n: usize) -> DenseVector {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.r#gen::<f64>()).collect()
}

/// Wrapper counting every entry handed out by the wrapped matrix.
struct CountingRows<'a> {
    inner: &'a SparseMatrix<usize, usize>,
    visits: Cell<usize>,
}

impl SparseRows<f64> for CountingRows<'_> {
    fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    fn try_for_each_row<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, &mut dyn Iterator<Item = (usize, f64)>) -> Result<(), E>,
    {
        self.inner.try_for_each_row(|i, row| {
            let mut counted = row.inspect(|_| self.visits.set(self.visits.get() + 1));
            f(i, &mut counted)
        })
    }
}

/// The 2×2 scenario `A = {0: {0: 2, 1: 3}, 1: {1: 4}}`, `x = [1, 1]`.
#[test]
fn two_by_two_scenario() {
    let a: SparseMatrix<usize, usize> =
        [((0, 0), 2.0), ((0, 1), 3.0), ((1, 1), 4.0)].into_iter().collect();
    let y = spmv(2, &a, &DenseVector::from(vec![1.0, 1.0])).unwrap();
    assert_eq!(y, DenseVector::from(vec![5.0, 4.0]));
}

/// Sparse product agrees with the dense faer product and always has length `n`.
#[cfg(feature = "faer")]
#[test]
fn matches_dense_product() {
    for &n in &[1usize, 7, 40] {
        let a = random_sparse(n, 3);
        let x = random_dense(n);
        let y = spmv(n, &a, &x).unwrap();
        assert_eq!(y.len(), n);

        use dokla::MatVec;

        let dense = a.to_dense(n, n).unwrap();
        let mut y_dense = DenseVector::zeros(n);
        dense.matvec(&x, &mut y_dense).unwrap();
        for i in 0..n {
            assert_abs_diff_eq!(y[i], y_dense[i], epsilon = 1e-12);
        }
    }
}

/// spmv(A, c·x) == c·spmv(A, x).
#[test]
fn linear_in_x() {
    let n = 25;
    let a = random_sparse(n, 4);
    let x = random_dense(n);
    let c = -3.75;
    let lhs = spmv(n, &a, &x.scale(c)).unwrap();
    let rhs = spmv(n, &a, &x).unwrap().scale(c);
    for i in 0..n {
        assert_abs_diff_eq!(lhs[i], rhs[i], epsilon = 1e-10);
    }
}

/// Only the stored entries are visited, however large `n` is.
#[test]
fn visits_only_stored_entries() {
    let mut a: SparseMatrix<usize, usize> = SparseMatrix::new();
    a.set(0, 3, 1.0);
    a.set(9_999, 0, 2.0);
    a.set(9_999, 9_998, 0.0);
    let k = a.nnz();

    for &n in &[10_000usize, 1_000_000] {
        let counting = CountingRows { inner: &a, visits: Cell::new(0) };
        let x = DenseVector::filled(n, 1.0);
        let y = spmv(n, &counting, &x).unwrap();
        assert_eq!(counting.visits.get(), k);
        assert_eq!(y[0], 1.0);
        assert_eq!(y[9_999], 2.0);
        assert_eq!(y.len(), n);
    }
}

/// Reading entries leaves the stored set and the product unchanged.
#[test]
fn reads_are_idempotent() {
    let a = random_sparse(10, 2);
    let before: Vec<_> = a.iter().map(|(&i, &j, &v)| (i, j, v)).collect();
    for i in 0..12 {
        for j in 0..12 {
            assert_eq!(a.get(&i, &j), a.get(&i, &j));
        }
    }
    let after: Vec<_> = a.iter().map(|(&i, &j, &v)| (i, j, v)).collect();
    assert_eq!(before, after);
}

/// Out-of-range rows and columns fail fast instead of resizing the output.
#[test]
fn out_of_range_indices() {
    let mut a: SparseMatrix<usize, usize> = SparseMatrix::new();
    a.set(4, 1, 1.0);
    let x = DenseVector::filled(5, 1.0);
    assert_eq!(spmv(4, &a, &x), Err(LaError::RowOutOfRange { row: 4, n: 4 }));
    assert_eq!(
        spmv(5, &a, &DenseVector::filled(1, 1.0)),
        Err(LaError::ColumnOutOfRange { col: 1, len: 1 })
    );
    assert!(spmv(5, &a, &x).is_ok());
}
