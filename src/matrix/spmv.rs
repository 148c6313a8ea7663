//! Sparse matrix–vector product over row-iterable sparse matrices.

use std::ops::Mul;

use num_traits::Zero;

use crate::core::traits::{MatVec, SparseRows};
use crate::error::LaError;
use crate::matrix::dense::DenseVector;
use crate::matrix::sparse::SparseMatrix;

/// Computes `y = A · x` with `y` of length `n`.
///
/// Only the stored rows of `a` are visited, and within each row only its stored
/// entries, so the cost is O(nnz(A)) regardless of `n`. Rows that are not stored
/// leave `y[i] = 0`. Each row sum starts from zero and accumulates in the row's
/// iteration order (ascending column for [`SparseMatrix`]).
///
/// # Errors
/// - [`LaError::RowOutOfRange`] if a stored row index is `>= n`.
/// - [`LaError::ColumnOutOfRange`] if a stored column index is `>= x.len()`.
pub fn spmv<T, A>(n: usize, a: &A, x: &DenseVector<T>) -> Result<DenseVector<T>, LaError>
where
    T: Copy + Zero + Mul<Output = T>,
    A: SparseRows<T> + ?Sized,
{
    let mut y = DenseVector::zeros(n);
    let mut rows = 0usize;
    let mut visited = 0usize;
    a.try_for_each_row::<LaError, _>(|i, row| {
        if i >= n {
            return Err(LaError::RowOutOfRange { row: i, n });
        }
        let mut s = T::zero();
        for (j, a_ij) in row {
            let x_j = x
                .get(j)
                .ok_or(LaError::ColumnOutOfRange { col: j, len: x.len() })?;
            s = s + a_ij * x_j;
            visited += 1;
        }
        y[i] = s;
        rows += 1;
        Ok(())
    })?;
    log::debug!("spmv: n={n}, rows visited={rows}, entries visited={visited}");
    Ok(y)
}

/// `y.len()` is the output length; `y` is overwritten, including entries of rows
/// that are not stored.
impl<T> MatVec<DenseVector<T>> for SparseMatrix<usize, usize, T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    fn matvec(&self, x: &DenseVector<T>, y: &mut DenseVector<T>) -> Result<(), LaError> {
        *y = spmv(y.len(), self, x)?;
        Ok(())
    }
}
