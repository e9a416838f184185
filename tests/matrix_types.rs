//! Integration tests for matrix construction, access, and structural edits.

use dynmatrix::{Matrix, MatrixError, MAX_DIM};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_allocates_zeroed_cells() {
    let m = Matrix::<f64>::new(2, 3).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.ncols(), 3);
    for v in m.iter() {
        assert_eq!(*v, 0.0);
    }
}

#[test]
fn new_rejects_out_of_range_dims() {
    assert!(matches!(
        Matrix::<f64>::new(0, 3),
        Err(MatrixError::Range(_))
    ));
    assert!(matches!(
        Matrix::<f64>::new(3, 0),
        Err(MatrixError::Range(_))
    ));
    assert!(matches!(
        Matrix::<f64>::new(MAX_DIM + 1, 1),
        Err(MatrixError::Range(_))
    ));
}

#[test]
fn from_slice_fills_row_major() {
    let m = Matrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m[(0, 0)], 1);
    assert_eq!(m[(0, 2)], 3);
    assert_eq!(m[(1, 0)], 4);
    assert_eq!(m[(1, 2)], 6);
}

#[test]
fn from_slice_ignores_extra_elements() {
    // The buffer only has to be long enough; the tail is unused.
    let m = Matrix::from_slice(2, 2, &[1, 2, 3, 4, 99, 98]).unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn from_slice_short_buffer_errors() {
    let err = Matrix::from_slice(2, 3, &[1, 2, 3]).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 3
        }
    ));
}

#[test]
fn from_shape_vec_requires_exact_length() {
    let m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.shape(), (2, 2));

    let err = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::ShapeMismatch {
            rows: 2,
            cols: 2,
            len: 5
        }
    ));
}

#[test]
fn default_is_the_unsized_state() {
    let m = Matrix::<f64>::default();
    assert!(m.is_empty());
    assert_eq!(m.shape(), (0, 0));
    assert!(m.is_square());
}

// ---------------------------------------------------------------------------
// Checked access
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_round_trip() {
    let mut m = Matrix::<f64>::new(2, 2).unwrap();
    m.set(1, 0, 7.5).unwrap();
    assert_eq!(m.get(1, 0).unwrap(), 7.5);
    assert_eq!(m.get(0, 1).unwrap(), 0.0);
}

#[test]
fn get_rejects_index_past_current_dims() {
    let m = Matrix::<f64>::new(2, 2).unwrap();
    let err = m.get(5, 0).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::InvalidIndex { index: 5, count: 2 }
    ));
    let err = m.get(0, 2).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::InvalidIndex { index: 2, count: 2 }
    ));
}

#[test]
fn get_rejects_index_past_ceiling_as_range() {
    let m = Matrix::<f64>::new(2, 2).unwrap();
    assert!(matches!(m.get(MAX_DIM, 0), Err(MatrixError::Range(_))));
}

#[test]
fn unsized_matrix_rejects_indexed_access() {
    let mut m = Matrix::<f64>::default();
    assert!(matches!(
        m.get(0, 0),
        Err(MatrixError::InvalidIndex { index: 0, count: 0 })
    ));
    assert!(matches!(
        m.set(0, 0, 1.0),
        Err(MatrixError::InvalidIndex { index: 0, count: 0 })
    ));
}

#[test]
fn index_sugar_reads_and_writes() {
    let mut m = Matrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
    m[(0, 1)] = 20;
    assert_eq!(m[(0, 1)], 20);
    assert_eq!(m[(1, 1)], 4);
}

#[test]
#[should_panic(expected = "column index out of bounds")]
fn index_sugar_rejects_a_column_past_the_row_end() {
    // The flat offset of (0, 5) lands inside the buffer; it must still
    // panic rather than alias a cell of the next row.
    let m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let _ = m[(0, 5)];
}

#[test]
#[should_panic(expected = "column index out of bounds")]
fn index_sugar_rejects_a_write_past_the_row_end() {
    let mut m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    m[(0, 5)] = 99;
}

#[test]
#[should_panic(expected = "row index out of bounds")]
fn index_sugar_rejects_a_row_past_the_end() {
    let m = Matrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
    let _ = m[(2, 0)];
}

#[test]
fn resize_preserves_overlap_and_zero_fills() {
    let mut m = Matrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
    m.resize(3, 3).unwrap();
    assert_eq!(m.shape(), (3, 3));
    assert_eq!(m[(0, 0)], 1);
    assert_eq!(m[(1, 1)], 4);
    assert_eq!(m[(2, 2)], 0);
    assert_eq!(m[(0, 2)], 0);

    m.resize(1, 2).unwrap();
    assert_eq!(m.to_vec(), vec![1, 2]);
}

#[test]
fn resize_brings_the_unsized_state_to_life() {
    let mut m = Matrix::<i32>::default();
    m.resize(2, 2).unwrap();
    assert_eq!(m.shape(), (2, 2));
    m.set(0, 0, 5).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), 5);
}

#[test]
fn resize_rejects_zero_dims() {
    let mut m = Matrix::<f64>::new(2, 2).unwrap();
    assert!(matches!(m.resize(0, 2), Err(MatrixError::Range(_))));
    // Failed resize leaves the matrix untouched.
    assert_eq!(m.shape(), (2, 2));
}

// ---------------------------------------------------------------------------
// Structural edits
// ---------------------------------------------------------------------------

#[test]
fn remove_row_shifts_later_rows_up() {
    let mut m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    m.remove_row(1).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row_slice(0), &[1, 2, 3]);
    assert_eq!(m.row_slice(1), &[7, 8, 9]);
}

#[test]
fn remove_col_shifts_later_cols_left() {
    let mut m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    m.remove_col(0).unwrap();
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row_slice(0), &[2, 3]);
    assert_eq!(m.row_slice(1), &[5, 6]);
    assert_eq!(m.row_slice(2), &[8, 9]);
}

#[test]
fn removing_the_last_row_fails() {
    let mut m = Matrix::from_slice(1, 4, &[1, 2, 3, 4]).unwrap();
    let err = m.remove_row(0).unwrap_err();
    assert!(matches!(err, MatrixError::CannotRemoveDim));
    assert_eq!(m.shape(), (1, 4));
}

#[test]
fn removing_the_last_col_fails() {
    let mut m = Matrix::from_slice(4, 1, &[1, 2, 3, 4]).unwrap();
    let err = m.remove_col(0).unwrap_err();
    assert!(matches!(err, MatrixError::CannotRemoveDim));
    assert_eq!(m.shape(), (4, 1));
}

#[test]
fn remove_at_index_equal_to_count_fails() {
    let mut m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    assert!(matches!(
        m.remove_row(3),
        Err(MatrixError::InvalidIndex { index: 3, count: 3 })
    ));
    assert!(matches!(
        m.remove_col(3),
        Err(MatrixError::InvalidIndex { index: 3, count: 3 })
    ));
    // The invalid-index check wins even when only one row remains.
    let mut single = Matrix::from_slice(1, 2, &[1, 2]).unwrap();
    assert!(matches!(
        single.remove_row(5),
        Err(MatrixError::InvalidIndex { index: 5, count: 1 })
    ));
}

#[test]
fn failed_removal_leaves_contents_untouched() {
    let m = Matrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
    let mut edited = m.clone();
    assert!(edited.remove_row(2).is_err());
    assert_eq!(edited, m);
}

#[test]
fn edit_session_reshapes_step_by_step() -> anyhow::Result<()> {
    let mut m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9])?;
    m.remove_row(0)?;
    m.remove_col(2)?;
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.to_vec(), vec![4, 5, 7, 8]);
    m.resize(2, 3)?;
    m.set(0, 2, 6)?;
    m.set(1, 2, 9)?;
    assert_eq!(m.to_vec(), vec![4, 5, 6, 7, 8, 9]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Factories and diagonals
// ---------------------------------------------------------------------------

#[test]
fn zeros_fills_the_additive_identity() {
    let m = Matrix::<i64>::zeros(2, 3).unwrap();
    assert_eq!(m.to_vec(), vec![0; 6]);
}

#[test]
fn identity_has_ones_on_the_main_diagonal() {
    let m = Matrix::<f64>::identity(3).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(m[(i, j)], expected);
        }
    }
}

#[test]
fn main_diagonal_of_3x3() {
    let m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let d = m.main_diagonal().unwrap();
    assert_eq!(d.shape(), (1, 3));
    assert_eq!(d.to_vec(), vec![1, 5, 9]);
}

#[test]
fn anti_diagonal_of_3x3() {
    let m = Matrix::from_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let d = m.anti_diagonal().unwrap();
    assert_eq!(d.shape(), (1, 3));
    // Position i holds the cell at (i, n-1-i).
    assert_eq!(d.to_vec(), vec![3, 5, 7]);
}

#[test]
fn diagonals_require_square_matrices() {
    let m = Matrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    assert!(matches!(
        m.main_diagonal(),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    ));
    assert!(matches!(
        m.anti_diagonal(),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn diagonal_of_the_unsized_state_errors() {
    // 0x0 is square, but its 1x0 diagonal row cannot be allocated.
    let m = Matrix::<f64>::default();
    assert!(matches!(m.main_diagonal(), Err(MatrixError::Range(_))));
    assert!(matches!(m.anti_diagonal(), Err(MatrixError::Range(_))));
}

// ---------------------------------------------------------------------------
// Transpose, display, value semantics
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_rows_and_cols() {
    let m = Matrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t[(0, 0)], 1);
    assert_eq!(t[(0, 1)], 4);
    assert_eq!(t[(2, 0)], 3);
    assert_eq!(t[(2, 1)], 6);
}

#[test]
fn transpose_twice_is_identity() {
    let m = Matrix::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn transpose_of_the_unsized_state_is_unsized() {
    let m = Matrix::<f64>::default();
    assert!(m.transpose().is_empty());
}

#[test]
fn random_transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let rows = rng.gen_range(1..=8);
        let cols = rng.gen_range(1..=8);
        let values: Vec<i32> = (0..rows * cols).map(|_| rng.gen_range(-50..50)).collect();
        let m = Matrix::from_shape_vec((rows, cols), values).unwrap();
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn display_renders_rows_on_separate_lines() {
    let m = Matrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
    assert_eq!(format!("{}", m), "[[1, 2],\n [3, 4]]");

    let empty = Matrix::<i32>::default();
    assert_eq!(format!("{}", empty), "[]");
}

#[test]
fn clone_is_an_independent_copy() {
    let source = Matrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
    let mut copy = source.clone();
    copy.set(0, 0, 100).unwrap();
    copy.remove_col(1).unwrap();
    assert_eq!(source[(0, 0)], 1);
    assert_eq!(source.shape(), (2, 2));
}

#[test]
fn matrices_are_send_and_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<Matrix<f64>>();
    assert_sync::<Matrix<f64>>();
    assert_send::<Matrix<i32>>();
    assert_sync::<Matrix<i32>>();
}

// ---------------------------------------------------------------------------
// Serialization (feature-gated)
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_preserves_shape_and_contents() {
    let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[cfg(feature = "serde")]
#[test]
fn serde_payload_carries_shape_fields() {
    let m = Matrix::from_slice(1, 2, &[7, 8]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains("\"rows\":1"));
    assert!(json.contains("\"cols\":2"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_a_buffer_that_cannot_fill_the_shape() {
    // A one-element buffer claiming 2x2 would index past the data on
    // first access; deserialization has to refuse it up front.
    let result = serde_json::from_str::<Matrix<f64>>(r#"{"data":[1.0],"rows":2,"cols":2}"#);
    let err = result.unwrap_err();
    assert!(err
        .to_string()
        .contains("invalid shape (2, 2) for buffer of length 1"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_the_unsized_state() {
    let empty = Matrix::<i32>::default();
    let json = serde_json::to_string(&empty).unwrap();
    let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
    assert!(back.is_empty());
}
