//! Matrix aliases and the quadrant split.

use ndarray::{s, Array2, ArrayView2};

/// Dense square matrix of reals.
pub type Matrix = Array2<f64>;

/// Borrowed, possibly strided view into a [`Matrix`].
pub type MatrixView<'a> = ArrayView2<'a, f64>;

/// The four `h/2 × h/2` blocks of an even-sized matrix, as views.
#[derive(Debug, Clone, Copy)]
pub struct Quadrants<'a> {
    pub q11: MatrixView<'a>,
    pub q12: MatrixView<'a>,
    pub q21: MatrixView<'a>,
    pub q22: MatrixView<'a>,
}

impl<'a> Quadrants<'a> {
    /// Split `m` at its row and column midpoint without copying.
    #[must_use]
    pub fn split(m: MatrixView<'a>) -> Self {
        let h = m.nrows() / 2;
        Self {
            q11: m.slice_move(s![..h, ..h]),
            q12: m.slice_move(s![..h, h..]),
            q21: m.slice_move(s![h.., ..h]),
            q22: m.slice_move(s![h.., h..]),
        }
    }
}
