//! Interop between dokla containers and `faer` dense matrices.
//!
//! This module lets a [`SparseMatrix`] be densified into a `faer::Mat`, moves
//! [`DenseVector`]s in and out of faer column matrices, and implements [`MatVec`]
//! for `faer::Mat` so that sparse and dense products can be checked against each
//! other.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::MatVec;
use crate::error::LaError;
use crate::matrix::{DenseVector, SparseMatrix};
use faer::Mat;
use num_traits::Zero;
use std::ops::Mul;

impl<T: Copy + Zero> SparseMatrix<usize, usize, T> {
    /// Dense `nrows × ncols` copy of the matrix; implicit entries become zero.
    ///
    /// Fails if a stored row or column lies outside the requested shape.
    pub fn to_dense(&self, nrows: usize, ncols: usize) -> Result<Mat<T>, LaError> {
        for (&i, &j, _) in self.iter() {
            if i >= nrows {
                return Err(LaError::RowOutOfRange { row: i, n: nrows });
            }
            if j >= ncols {
                return Err(LaError::ColumnOutOfRange { col: j, len: ncols });
            }
        }
        let mut dense = Mat::from_fn(nrows, ncols, |_, _| T::zero());
        for (&i, &j, &a_ij) in self.iter() {
            dense[(i, j)] = a_ij;
        }
        Ok(dense)
    }
}

impl<T: Copy> DenseVector<T> {
    /// The vector as an `n × 1` faer matrix.
    pub fn to_faer(&self) -> Mat<T> {
        let x = self.as_slice();
        Mat::from_fn(x.len(), 1, |i, _| x[i])
    }

    /// Copies column `j` of `m`.
    ///
    /// # Panics
    /// Panics if `j >= m.ncols()`.
    pub fn from_faer_column(m: &Mat<T>, j: usize) -> Self {
        assert!(j < m.ncols(), "column {j} out of range for {} columns", m.ncols());
        (0..m.nrows()).map(|i| m[(i, j)]).collect()
    }
}

/// Dense matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x`; unlike the sparse product the shapes must match exactly.
impl<T: Copy + Zero + Mul<Output = T>> MatVec<DenseVector<T>> for Mat<T> {
    fn matvec(&self, x: &DenseVector<T>, y: &mut DenseVector<T>) -> Result<(), LaError> {
        if self.ncols() != x.len() {
            return Err(LaError::LengthMismatch { left: self.ncols(), right: x.len() });
        }
        if self.nrows() != y.len() {
            return Err(LaError::LengthMismatch { left: self.nrows(), right: y.len() });
        }
        for i in 0..self.nrows() {
            let mut s = T::zero();
            for j in 0..self.ncols() {
                s = s + self[(i, j)] * x[j];
            }
            y[i] = s;
        }
        Ok(())
    }
}
