//! Uncounted dense primitives used by the counter and the recursion.

use ndarray::{concatenate, Axis};

use crate::error::StrassenError;
use crate::matrix_types::{Matrix, MatrixView};

/// Check that `a` and `b` are non-empty, square, and the same shape.
///
/// Returns the common dimension.
pub fn check_square_pair(a: &MatrixView<'_>, b: &MatrixView<'_>) -> Result<usize, StrassenError> {
    if a.dim() != b.dim() {
        return Err(StrassenError::ShapeMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    check_square(a)
}

/// Check that `m` is non-empty and square, returning its dimension.
pub fn check_square(m: &MatrixView<'_>) -> Result<usize, StrassenError> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(StrassenError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(StrassenError::Empty);
    }
    Ok(rows)
}

/// Classical `O(d³)` product.
#[must_use]
pub fn direct_multiply(a: MatrixView<'_>, b: MatrixView<'_>) -> Matrix {
    a.dot(&b)
}

/// Elementwise sum.
#[must_use]
pub fn add(a: MatrixView<'_>, b: MatrixView<'_>) -> Matrix {
    &a + &b
}

/// Elementwise negation. Free in the operation accounting.
#[must_use]
pub fn negate(a: MatrixView<'_>) -> Matrix {
    a.mapv(|x| -x)
}

/// Join four equal blocks into `[c11 | c12; c21 | c22]`.
pub fn assemble(
    c11: &Matrix,
    c12: &Matrix,
    c21: &Matrix,
    c22: &Matrix,
) -> Result<Matrix, StrassenError> {
    let top = concatenate(Axis(1), &[c11.view(), c12.view()])?;
    let bottom = concatenate(Axis(1), &[c21.view(), c22.view()])?;
    Ok(concatenate(Axis(0), &[top.view(), bottom.view()])?)
}

/// Largest absolute elementwise difference.
#[must_use]
pub fn max_abs_error(actual: MatrixView<'_>, expected: MatrixView<'_>) -> f64 {
    actual
        .iter()
        .zip(expected.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// `|x - y| <= atol + rtol * |y|` for every element, and equal shapes.
#[must_use]
pub fn all_close(actual: MatrixView<'_>, expected: MatrixView<'_>, rtol: f64, atol: f64) -> bool {
    actual.dim() == expected.dim()
        && actual
            .iter()
            .zip(expected.iter())
            .all(|(x, y)| (x - y).abs() <= atol + rtol * y.abs())
}
