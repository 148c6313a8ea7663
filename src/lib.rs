//! dokla: dictionary-of-keys sparse linear algebra
//!
//! This crate provides key-indexed sparse vectors and matrices whose absent entries read as
//! zero, a sparse matrix-vector product whose cost is proportional to the number of stored
//! entries, and the dense vector arithmetic needed to work with its results.

pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use utils::*;
