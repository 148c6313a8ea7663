//! Matrix module: sparse containers, dense vectors and the sparse product.

pub mod dense;
pub use dense::DenseVector;
pub mod sparse;
pub use sparse::{SparseMatrix, SparseVector};
pub mod spmv;
pub use spmv::spmv;
