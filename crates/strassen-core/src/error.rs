//! Error type shared by the counter, the recursion, and the drivers.

use crate::complexity::OperationCounts;

/// Errors raised by Strassen multiplication, embedding, and verification.
///
/// Every variant is a precondition or self-test failure. Nothing is retried;
/// the first error aborts the whole computation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StrassenError {
    /// An operand is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The two operands have different shapes.
    #[error("operand shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// An operand has no elements.
    #[error("matrix is empty")]
    Empty,

    /// Halving `dim` never lands exactly on `base`.
    #[error("dimension {dim} is not base size {base} times a power of two")]
    UnreachableBase { dim: usize, base: usize },

    /// Invalid size configuration, detected before any computation.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Padding target smaller than the matrix being padded.
    #[error("cannot pad a {dim}x{dim} matrix into {target}x{target}")]
    PaddingTooSmall { target: usize, dim: usize },

    /// The Strassen product disagrees with the direct product.
    #[error("strassen product differs from direct product (max error {max_error:e})")]
    Mismatch { max_error: f64 },

    /// Requested corner block larger than the matrix it is cut from.
    #[error("cannot take a {block}x{block} block from a {dim}x{dim} matrix")]
    BlockTooLarge { block: usize, dim: usize },

    /// The measured counts disagree with the closed-form prediction.
    #[error("measured {measured:?} operations, predicted {predicted:?}")]
    CountMismatch {
        measured: OperationCounts,
        predicted: OperationCounts,
    },

    /// Block concatenation failed.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
