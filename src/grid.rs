use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major 2-D storage backing [`Matrix`](crate::Matrix).
///
/// `Grid` is a plain container: a position outside the current shape
/// panics like slice indexing does, per coordinate, so a column past the
/// row end never aliases into the next row. Range validation and
/// dimension policy live in the matrix layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Wire-format twin of [`Grid`]; the conversion enforces
/// `data.len() == rows * cols` on anything deserialized.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = crate::error::MatrixError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        if raw.data.len() != raw.rows * raw.cols {
            return Err(crate::error::MatrixError::ShapeMismatch {
                rows: raw.rows,
                cols: raw.cols,
                len: raw.data.len(),
            });
        }
        Ok(Grid {
            data: raw.data,
            rows: raw.rows,
            cols: raw.cols,
        })
    }
}

impl<T> Grid<T> {
    /// Assembles a grid from a buffer already laid out row-major.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols, "buffer does not match shape");
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn mapv<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn transpose(&self) -> Grid<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Grid {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T> Grid<T>
where
    T: Clone,
{
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    /// Reshapes the store in place. Cells inside the overlap of the old and
    /// new shapes keep their values; cells outside it are zero.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if cols == self.cols {
            // Row-major layout: trailing rows truncate or extend in place.
            self.data.resize(rows * cols, T::zero());
        } else {
            let mut data = Vec::with_capacity(rows * cols);
            for row in 0..rows {
                for col in 0..cols {
                    if row < self.rows && col < self.cols {
                        data.push(self[(row, col)].clone());
                    } else {
                        data.push(T::zero());
                    }
                }
            }
            self.data = data;
        }
        self.rows = rows;
        self.cols = cols;
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.0 < self.rows, "row index out of bounds");
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.0 < self.rows, "row index out of bounds");
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
