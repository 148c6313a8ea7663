//! Core linear-algebra traits for dokla.

use crate::error::LaError;

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x, overwriting `y`.
    ///
    /// `y.len()` is taken as the number of rows of the product; indices that fall
    /// outside `x` or `y` are reported instead of being skipped.
    fn matvec(&self, x: &V, y: &mut V) -> Result<(), LaError>;
}

/// Row-wise access to the explicitly stored entries of a sparse matrix.
///
/// Implementors must visit only the stored entries: implicit zeros are never
/// synthesised, which is what keeps [`spmv`](crate::matrix::spmv::spmv) proportional
/// to the number of nonzeros rather than to the matrix dimensions.
pub trait SparseRows<T> {
    /// Number of explicitly stored entries.
    fn nnz(&self) -> usize;

    /// Calls `f` once per stored row with the row index and an iterator over that
    /// row's stored `(column, value)` pairs. Stops at the first error.
    fn try_for_each_row<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(usize, &mut dyn Iterator<Item = (usize, T)>) -> Result<(), E>;
}
