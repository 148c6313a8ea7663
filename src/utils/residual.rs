//! Residual checks for approximate solutions of `A x = b`.

use num_traits::Float;

use crate::core::traits::SparseRows;
use crate::error::LaError;
use crate::matrix::dense::DenseVector;
use crate::matrix::spmv::spmv;

/// Returns `r = b - A x`, with the product taken at length `b.len()`.
pub fn residual<T, A>(a: &A, x: &DenseVector<T>, b: &DenseVector<T>) -> Result<DenseVector<T>, LaError>
where
    T: Float,
    A: SparseRows<T> + ?Sized,
{
    let ax = spmv(b.len(), a, x)?;
    b.subtract(&ax)
}

/// Returns `‖b - A x‖₂`.
pub fn residual_norm<T, A>(a: &A, x: &DenseVector<T>, b: &DenseVector<T>) -> Result<T, LaError>
where
    T: Float,
    A: SparseRows<T> + ?Sized,
{
    let r = residual(a, x, b)?;
    let norm = r.norm2();
    log::trace!("residual norm over {} rows: {:e}", b.len(), norm.to_f64().unwrap_or(f64::NAN));
    Ok(norm)
}
