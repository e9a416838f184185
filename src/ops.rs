use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum.
    ///
    /// Fails with `Incompatible` unless both operands have the same shape.
    pub fn checked_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.check_same_shape(rhs)?;
        let mut out = Matrix::new(self.nrows(), self.ncols())?;
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                out.data[(i, j)] = self.data[(i, j)] + rhs.data[(i, j)];
            }
        }
        Ok(out)
    }

    /// Elementwise difference.
    ///
    /// Fails with `Incompatible` unless both operands have the same shape.
    pub fn checked_sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.check_same_shape(rhs)?;
        let mut out = Matrix::new(self.nrows(), self.ncols())?;
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                out.data[(i, j)] = self.data[(i, j)] - rhs.data[(i, j)];
            }
        }
        Ok(out)
    }

    /// Matrix product: `out[(i, j)] = sum_k self[(i, k)] * rhs[(k, j)]`.
    ///
    /// The result is `self.nrows()` x `rhs.ncols()`. Fails with
    /// `Incompatible` when the inner dimensions differ.
    pub fn checked_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.ncols() != rhs.nrows() {
            return Err(MatrixError::Incompatible {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let mut out = Matrix::new(self.nrows(), rhs.ncols())?;
        for i in 0..out.nrows() {
            for j in 0..out.ncols() {
                let mut acc = T::zero();
                for k in 0..self.ncols() {
                    acc = acc + self.data[(i, k)] * rhs.data[(k, j)];
                }
                out.data[(i, j)] = acc;
            }
        }
        Ok(out)
    }

    /// Right-division: `self * rhs.inverse()`.
    ///
    /// Inherits `NotInvertible` from the inverse and `Incompatible` from
    /// the product.
    pub fn checked_div(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let inv = rhs.inverse()?;
        self.checked_mul(&inv)
    }

    fn check_same_shape(&self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::Incompatible {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }
}

// Matrix-and-matrix operators. The reference-reference impl is the real
// one; the other three shapes forward to it. Dimension mismatch panics
// with the corresponding checked method's error message.

/// Elementwise sum of two referenced matrices.
///
/// # Panics
///
/// On shape mismatch; [`Matrix::checked_add`] is the non-panicking path.
impl<'a, 'b, T: Scalar> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn add(self, rhs: Matrix<T>) -> Self::Output {
        &self + &rhs
    }
}

impl<'a, T: Scalar> Add<&'a Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn add(self, rhs: &'a Matrix<T>) -> Self::Output {
        &self + rhs
    }
}

impl<'a, T: Scalar> Add<Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn add(self, rhs: Matrix<T>) -> Self::Output {
        self + &rhs
    }
}

/// Elementwise difference of two referenced matrices.
///
/// # Panics
///
/// On shape mismatch; [`Matrix::checked_sub`] is the non-panicking path.
impl<'a, 'b, T: Scalar> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn sub(self, rhs: Matrix<T>) -> Self::Output {
        &self - &rhs
    }
}

impl<'a, T: Scalar> Sub<&'a Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn sub(self, rhs: &'a Matrix<T>) -> Self::Output {
        &self - rhs
    }
}

impl<'a, T: Scalar> Sub<Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn sub(self, rhs: Matrix<T>) -> Self::Output {
        self - &rhs
    }
}

/// Matrix product of two referenced matrices.
///
/// # Panics
///
/// On inner-dimension mismatch; [`Matrix::checked_mul`] is the
/// non-panicking path.
impl<'a, 'b, T: Scalar> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        &self * &rhs
    }
}

impl<'a, T: Scalar> Mul<&'a Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn mul(self, rhs: &'a Matrix<T>) -> Self::Output {
        &self * rhs
    }
}

impl<'a, T: Scalar> Mul<Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        self * &rhs
    }
}

/// Right-division by a referenced matrix: `self * rhs.inverse()`.
///
/// # Panics
///
/// When `rhs` has no inverse; [`Matrix::checked_div`] is the non-panicking
/// path.
impl<'a, 'b, T: Scalar> Div<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn div(self, rhs: &'b Matrix<T>) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Scalar> Div for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn div(self, rhs: Matrix<T>) -> Self::Output {
        &self / &rhs
    }
}

impl<'a, T: Scalar> Div<&'a Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn div(self, rhs: &'a Matrix<T>) -> Self::Output {
        &self / rhs
    }
}

impl<'a, T: Scalar> Div<Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    #[inline]
    fn div(self, rhs: Matrix<T>) -> Self::Output {
        self / &rhs
    }
}

// Matrix-and-scalar operators: the scalar broadcasts over every cell.
// Always defined, whatever the shape.

impl<'a, T: Scalar> Add<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.mapv(|&v| v + rhs)
    }
}

impl<T: Scalar> Add<T> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        &self + rhs
    }
}

impl<'a, T: Scalar> Sub<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.mapv(|&v| v - rhs)
    }
}

impl<T: Scalar> Sub<T> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        &self - rhs
    }
}

impl<'a, T: Scalar> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.mapv(|&v| v * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}

impl<'a, T: Scalar> Div<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.mapv(|&v| v / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        &self / rhs
    }
}

// Scalar-on-the-left operators. Coherence forbids a blanket impl on a
// generic scalar, so these are generated per primitive type. `+` and `*`
// commute with the broadcast forms above; `-` and `/` apply the true
// reversed operation cell by cell.
macro_rules! scalar_matrix_ops {
    ($($t:ty),* $(,)?) => {$(
        impl Add<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn add(self, rhs: Matrix<$t>) -> Self::Output {
                self + &rhs
            }
        }

        impl<'a> Add<&'a Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn add(self, rhs: &'a Matrix<$t>) -> Self::Output {
                rhs.mapv(|&v| self + v)
            }
        }

        impl Sub<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn sub(self, rhs: Matrix<$t>) -> Self::Output {
                self - &rhs
            }
        }

        impl<'a> Sub<&'a Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn sub(self, rhs: &'a Matrix<$t>) -> Self::Output {
                rhs.mapv(|&v| self - v)
            }
        }

        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn mul(self, rhs: Matrix<$t>) -> Self::Output {
                self * &rhs
            }
        }

        impl<'a> Mul<&'a Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn mul(self, rhs: &'a Matrix<$t>) -> Self::Output {
                rhs.mapv(|&v| self * v)
            }
        }

        impl Div<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn div(self, rhs: Matrix<$t>) -> Self::Output {
                self / &rhs
            }
        }

        impl<'a> Div<&'a Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn div(self, rhs: &'a Matrix<$t>) -> Self::Output {
                rhs.mapv(|&v| self / v)
            }
        }
    )*};
}

scalar_matrix_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// Compound assignment: compute the binary result, then rebind the left
// operand to it. A matrix product can legitimately change the shape of
// the left operand here.

impl<'a, T: Scalar> AddAssign<&'a Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: &'a Matrix<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Scalar> AddAssign<Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self = &*self + &rhs;
    }
}

impl<T: Scalar> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, rhs: T) {
        *self = &*self + rhs;
    }
}

impl<'a, T: Scalar> SubAssign<&'a Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &'a Matrix<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Scalar> SubAssign<Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self = &*self - &rhs;
    }
}

impl<T: Scalar> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, rhs: T) {
        *self = &*self - rhs;
    }
}

impl<'a, T: Scalar> MulAssign<&'a Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn mul_assign(&mut self, rhs: &'a Matrix<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Scalar> MulAssign<Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn mul_assign(&mut self, rhs: Matrix<T>) {
        *self = &*self * &rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = &*self * rhs;
    }
}

impl<'a, T: Scalar> DivAssign<&'a Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn div_assign(&mut self, rhs: &'a Matrix<T>) {
        *self = &*self / rhs;
    }
}

impl<T: Scalar> DivAssign<Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn div_assign(&mut self, rhs: Matrix<T>) {
        *self = &*self / &rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = &*self / rhs;
    }
}
