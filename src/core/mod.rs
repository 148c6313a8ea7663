//! Core traits and dense interop wrappers.

pub mod traits;
#[cfg(feature = "faer")]
pub mod wrappers;

pub use traits::{MatVec, SparseRows};
