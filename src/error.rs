use std::error::Error;
use std::fmt;

use crate::range::RangeError;

/// Failure modes of matrix construction, structural edits, and linear algebra.
#[derive(Debug, Clone)]
pub enum MatrixError {
    /// An index or size fell outside the window its range type allows.
    Range(RangeError),
    /// A row or column index at or past the current count.
    InvalidIndex { index: usize, count: usize },
    CannotRemoveDim,
    NotSquare { rows: usize, cols: usize },
    NotInvertible,
    Incompatible {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A flat buffer whose length cannot fill the requested shape.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Range(err) => write!(f, "{}", err),
            MatrixError::InvalidIndex { index, count } => write!(
                f,
                "index {} out of bounds for dimension of size {}",
                index, count
            ),
            MatrixError::CannotRemoveDim => {
                write!(f, "cannot remove the last remaining row or column")
            }
            MatrixError::NotSquare { rows, cols } => write!(
                f,
                "operation requires a square matrix, got {}x{}",
                rows, cols
            ),
            MatrixError::NotInvertible => write!(f, "matrix is not invertible"),
            MatrixError::Incompatible { left, right } => write!(
                f,
                "incompatible dimensions: left is {}x{}, right is {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Range(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RangeError> for MatrixError {
    fn from(err: RangeError) -> Self {
        MatrixError::Range(err)
    }
}
