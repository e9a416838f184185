//! The matrix type itself: construction, checked access, structural
//! edits, factories, diagonal extraction, and transpose. Arithmetic and
//! the determinant family live in sibling impl modules.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::{One, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::grid::Grid;
use crate::range::{DimIndex, DimSize};

/// Dense, dynamically sized matrix over a numeric scalar (`f64` by default).
///
/// Storage is a row-major [`Grid`]. After any successful sized construction
/// or structural edit, both dimensions lie in `1..=MAX_DIM`. The `Default`
/// value is the degenerate 0x0 state: it owns no cells, every indexed
/// access on it is a checked error, and [`Matrix::resize`] brings it to a
/// usable shape.
///
/// Cloning produces an independent copy; mutating a clone never affects
/// the source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Matrix<T = f64> {
    pub(crate) data: Grid<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: Grid::from_parts(0, 0, Vec::new()),
        }
    }
}

impl<T> Matrix<T> {
    /// Allocates a `rows` x `cols` matrix with every cell zeroed.
    ///
    /// Both dimensions are validated against `1..=MAX_DIM` before the
    /// allocation happens (error kind `Range` on violation).
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError>
    where
        T: Clone + Zero,
    {
        let rows = DimSize::new(rows)?;
        let cols = DimSize::new(cols)?;
        Ok(Self {
            data: Grid::zeros(rows.get(), cols.get()),
        })
    }

    /// Fills a `rows` x `cols` matrix row-major from the front of `values`.
    ///
    /// The buffer must hold at least `rows * cols` elements; anything
    /// beyond that is ignored. A shorter buffer is a `ShapeMismatch`
    /// error.
    pub fn from_slice(rows: usize, cols: usize, values: &[T]) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let rows = DimSize::new(rows)?.get();
        let cols = DimSize::new(cols)?.get();
        let len = rows * cols;
        if values.len() < len {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Self {
            data: Grid::from_parts(rows, cols, values[..len].to_vec()),
        })
    }

    /// Exact-length twin of [`Matrix::from_slice`] that takes ownership of
    /// the buffer. `data.len()` must equal `rows * cols`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        let rows = DimSize::new(rows)?.get();
        let cols = DimSize::new(cols)?.get();
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            data: Grid::from_parts(rows, cols, data),
        })
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// True for the degenerate 0x0 state.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        self.data.row_slice(row)
    }

    /// Row-major iteration over all cells.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }

    pub fn mapv<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.mapv(f),
        }
    }

    /// Checked read at `(row, col)`.
    ///
    /// The position passes through the index range type first (kind
    /// `Range` past the ceiling), then is checked against the current
    /// dimensions (kind `InvalidIndex`).
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError>
    where
        T: Copy,
    {
        self.check_index(row, col)?;
        Ok(self.data[(row, col)])
    }

    /// Checked write at `(row, col)`; same validation as [`Matrix::get`].
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.data[(row, col)] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        DimIndex::new(row)?;
        DimIndex::new(col)?;
        if row >= self.nrows() {
            return Err(MatrixError::InvalidIndex {
                index: row,
                count: self.nrows(),
            });
        }
        if col >= self.ncols() {
            return Err(MatrixError::InvalidIndex {
                index: col,
                count: self.ncols(),
            });
        }
        Ok(())
    }

    /// Reshapes the matrix to `rows` x `cols`.
    ///
    /// Cells inside the overlap of the old and new shapes keep their
    /// values; cells outside it are zero. This is the store's resize
    /// policy, forwarded unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), MatrixError>
    where
        T: Clone + Zero,
    {
        let rows = DimSize::new(rows)?.get();
        let cols = DimSize::new(cols)?.get();
        log::debug!("resizing matrix {:?} -> {:?}", self.shape(), (rows, cols));
        self.data.resize(rows, cols);
        Ok(())
    }

    /// Removes one row, shifting the rows after it up one slot.
    ///
    /// Fails with `InvalidIndex` if `row` is at or past the current row
    /// count, and with `CannotRemoveDim` if only one row remains; the
    /// matrix is untouched on error.
    pub fn remove_row(&mut self, row: usize) -> Result<(), MatrixError>
    where
        T: Clone + Zero,
    {
        DimIndex::new(row)?;
        if row >= self.nrows() {
            return Err(MatrixError::InvalidIndex {
                index: row,
                count: self.nrows(),
            });
        }
        if self.nrows() == 1 {
            return Err(MatrixError::CannotRemoveDim);
        }

        for i in row..self.nrows() - 1 {
            for j in 0..self.ncols() {
                self.data[(i, j)] = self.data[(i + 1, j)].clone();
            }
        }
        self.data.resize(self.nrows() - 1, self.ncols());
        Ok(())
    }

    /// Removes one column, shifting the columns after it left one slot.
    ///
    /// Same failure modes as [`Matrix::remove_row`].
    pub fn remove_col(&mut self, col: usize) -> Result<(), MatrixError>
    where
        T: Clone + Zero,
    {
        DimIndex::new(col)?;
        if col >= self.ncols() {
            return Err(MatrixError::InvalidIndex {
                index: col,
                count: self.ncols(),
            });
        }
        if self.ncols() == 1 {
            return Err(MatrixError::CannotRemoveDim);
        }

        for i in 0..self.nrows() {
            for j in col..self.ncols() - 1 {
                self.data[(i, j)] = self.data[(i, j + 1)].clone();
            }
        }
        self.data.resize(self.nrows(), self.ncols() - 1);
        Ok(())
    }

    /// Every cell set to the additive identity.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError>
    where
        T: Clone + Zero,
    {
        Self::new(rows, cols)
    }

    /// Square matrix with ones on the main diagonal, zeros elsewhere.
    pub fn identity(size: usize) -> Result<Self, MatrixError>
    where
        T: Clone + Zero + One,
    {
        let mut mat = Self::new(size, size)?;
        for i in 0..size {
            mat.data[(i, i)] = T::one();
        }
        Ok(mat)
    }

    /// The main diagonal as a 1 x N matrix: `out[(0, i)] = self[(i, i)]`.
    ///
    /// Fails with `NotSquare` on a non-square receiver.
    pub fn main_diagonal(&self) -> Result<Matrix<T>, MatrixError>
    where
        T: Clone + Zero,
    {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        let n = self.nrows();
        let mut out = Matrix::new(1, n)?;
        for i in 0..n {
            out.data[(0, i)] = self.data[(i, i)].clone();
        }
        Ok(out)
    }

    /// The anti-diagonal as a 1 x N matrix: `out[(0, i)] = self[(i, n-1-i)]`.
    ///
    /// Fails with `NotSquare` on a non-square receiver.
    pub fn anti_diagonal(&self) -> Result<Matrix<T>, MatrixError>
    where
        T: Clone + Zero,
    {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        let n = self.nrows();
        let mut out = Matrix::new(1, n)?;
        for i in 0..n {
            out.data[(0, i)] = self.data[(i, n - 1 - i)].clone();
        }
        Ok(out)
    }

    /// The transpose: `out[(j, i)] = self[(i, j)]`. Works for any shape.
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        Matrix {
            data: self.data.transpose(),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.nrows() {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.ncols() {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
