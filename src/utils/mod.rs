//! Helpers built on top of the containers: residuals and text iterators.

pub mod residual;
pub use residual::{residual, residual_norm};
pub mod text;
pub use text::{alpha_char_pairs, alpha_chars, keys_geq_threshold};
