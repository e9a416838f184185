//! Dense, dynamically sized matrices over numeric scalars.
//!
//! The core type is [`Matrix`], a value-semantics 2-D container with the
//! four elementwise/product operator families (matrix, scalar, and
//! scalar-on-the-left operand shapes), structural row/column removal,
//! transpose and diagonal extraction, and exact cofactor-based
//! determinant, cofactor matrix, and inverse.
//!
//! Fallible operations return [`MatrixError`] through the constructor
//! surface and the `checked_*` methods; the operator traits are panicking
//! sugar over the same checks. Storage is a row-major [`Grid`]; indices
//! and sizes pass through the [`Bounded`] range type before any
//! allocation happens.
//!
//! ```
//! use dynmatrix::Matrix;
//!
//! let a: Matrix<f64> = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0])?;
//! let product = a.checked_mul(&a.inverse()?)?;
//! assert!((product[(0, 0)] - 1.0).abs() < 1e-12);
//! # Ok::<(), dynmatrix::MatrixError>(())
//! ```

pub mod error;
pub mod grid;
mod linalg;
pub mod matrix;
mod ops;
pub mod range;

pub use error::MatrixError;
pub use grid::Grid;
pub use matrix::Matrix;
pub use range::{Bounded, DimIndex, DimSize, RangeError, MAX_DIM};

use num_traits::Num;

/// Scalar types a [`Matrix`] can hold: numeric semantics (zero, one, the
/// four arithmetic operators, equality) plus cheap copying. Blanket
/// implemented, so `f64`, `f32`, and the integer primitives all qualify.
/// Negation is expressed as `T::zero() - x`, which keeps unsigned and
/// `Neg`-less scalars usable.
pub trait Scalar: Num + Copy {}

impl<T: Num + Copy> Scalar for T {}
