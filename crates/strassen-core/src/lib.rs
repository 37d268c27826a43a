//! # strassen-core
//!
//! Strassen matrix multiplication with exact operation counting.
//! Also provides the identity-padding embedding that adapts arbitrary sizes
//! to the `m · 2^k` recursion, and closed-form count predictions.

pub mod complexity;
pub mod constants;
pub mod counter;
pub mod embedding;
pub mod error;
pub mod matrix_ops;
pub mod matrix_types;
pub mod observer;
pub mod observers;
pub mod options;
pub mod strassen;

// Re-exports
pub use complexity::{naive_counts, predict_counts, Advantage, OperationCounts};
pub use constants::exit_codes;
pub use counter::{CountedOps, OperationCounter};
pub use embedding::{derive_embedding, pad, top_left, Embedding};
pub use error::StrassenError;
pub use matrix_types::{Matrix, MatrixView};
pub use observer::{OperationEvent, OperationKind, OperationObserver};
pub use options::{Options, RunMode};
pub use strassen::{strassen_multiply, StrassenMultiplier};

/// Multiply two `m · 2^k` matrices with Strassen recursion down to `base_size`.
///
/// Convenience wrapper for simple use cases; use [`StrassenMultiplier`] or
/// [`OperationCounter`] directly for verbose reporting.
///
/// # Example
/// ```
/// use ndarray::array;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[5.0, 6.0], [7.0, 8.0]];
/// let (product, counts) = strassen_core::multiply(a.view(), b.view(), 1).unwrap();
/// assert_eq!(product, array![[19.0, 22.0], [43.0, 50.0]]);
/// assert_eq!(counts.multiplications, 7);
/// ```
pub fn multiply(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    base_size: usize,
) -> Result<(Matrix, OperationCounts), StrassenError> {
    StrassenMultiplier::new(base_size).multiply(a, b)
}
