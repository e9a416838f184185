use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Determinant by recursive first-row cofactor expansion.
    ///
    /// 1x1 and 2x2 resolve in closed form; anything larger expands along
    /// the first row, with minors expressed as index masks over the
    /// original storage instead of copies. Cost grows factorially with
    /// the dimension.
    ///
    /// # Returns
    ///
    /// The determinant as a `T`. Fails with `NotSquare` on a non-square
    /// receiver and with `InvalidIndex` on the 0x0 state (no first row
    /// to expand along).
    pub fn det(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        if self.is_empty() {
            return Err(MatrixError::InvalidIndex { index: 0, count: 0 });
        }
        let n = self.nrows();
        if n > 2 {
            log::trace!("expanding {}x{} determinant", n, n);
        }
        let rows: Vec<usize> = (0..n).collect();
        let cols: Vec<usize> = (0..n).collect();
        Ok(self.det_masked(&rows, &cols))
    }

    /// Determinant of the submatrix selected by the live `rows` and `cols`
    /// index lists (equal length, ascending). Expansion always drops the
    /// first live row, so the recursion passes `rows[1..]` along and only
    /// the column list is rebuilt per minor.
    fn det_masked(&self, rows: &[usize], cols: &[usize]) -> T {
        match cols.len() {
            // The determinant of nothing is the empty product. Reached
            // only while building cofactors of a 1x1 matrix.
            0 => T::one(),
            1 => self.data[(rows[0], cols[0])],
            2 => {
                self.data[(rows[0], cols[0])] * self.data[(rows[1], cols[1])]
                    - self.data[(rows[1], cols[0])] * self.data[(rows[0], cols[1])]
            }
            n => {
                let mut det = T::zero();
                for (i, &col) in cols.iter().enumerate() {
                    let mut minor_cols = Vec::with_capacity(n - 1);
                    minor_cols.extend_from_slice(&cols[..i]);
                    minor_cols.extend_from_slice(&cols[i + 1..]);

                    let term =
                        self.data[(rows[0], col)] * self.det_masked(&rows[1..], &minor_cols);
                    det = if i % 2 == 0 { det + term } else { det - term };
                }
                det
            }
        }
    }

    /// Matrix of signed minor determinants: entry `(i, j)` is `(-1)^(i+j)`
    /// times the determinant of the minor without row `i` and column `j`.
    /// Transposing it yields the adjugate.
    ///
    /// Fails like [`Matrix::det`]. For a 1x1 receiver the minor is empty
    /// and its determinant is 1, so the result is `[[1]]`.
    pub fn cofactor_matrix(&self) -> Result<Matrix<T>, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        if self.is_empty() {
            return Err(MatrixError::InvalidIndex { index: 0, count: 0 });
        }
        let n = self.nrows();
        let mut out = Matrix::new(n, n)?;
        for i in 0..n {
            for j in 0..n {
                let rows: Vec<usize> = (0..n).filter(|&r| r != i).collect();
                let cols: Vec<usize> = (0..n).filter(|&c| c != j).collect();
                let minor = self.det_masked(&rows, &cols);
                out.data[(i, j)] = if (i + j) % 2 == 0 {
                    minor
                } else {
                    T::zero() - minor
                };
            }
        }
        Ok(out)
    }

    /// True iff the matrix is square with a nonzero determinant.
    pub fn is_invertible(&self) -> bool {
        self.is_square() && matches!(self.det(), Ok(d) if d != T::zero())
    }

    /// The inverse, as the adjugate times the reciprocal determinant.
    ///
    /// Fails with `NotInvertible` unless [`Matrix::is_invertible`] holds;
    /// non-square and singular receivers report the same kind. The
    /// reciprocal is computed in `T`, so for integer scalars it truncates
    /// like any other integer division.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        if !self.is_invertible() {
            return Err(MatrixError::NotInvertible);
        }
        let scale = T::one() / self.det()?;
        Ok(self.cofactor_matrix()?.transpose() * scale)
    }
}
