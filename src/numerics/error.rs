// src/numerics/error.rs
// Error type shared by every matrix operation.

/// Errors that can occur while building, transforming or analysing a matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Invalid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },

    #[error("String holds {count} elements, which is not a perfect square")]
    NotSquareString { count: usize },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;
