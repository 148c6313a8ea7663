use thiserror::Error;

// Unified error type for dokla

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaError {
    #[error("length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("row index {row} out of range for output length {n}")]
    RowOutOfRange { row: usize, n: usize },
    #[error("column index {col} out of range for input vector of length {len}")]
    ColumnOutOfRange { col: usize, len: usize },
}
