//! Size embedding: choose `n' = m · 2^k ≥ n` and identity-pad inputs to it.
//!
//! Padding both operands the same way keeps the top-left `n × n` block of
//! the padded product equal to the true product; the other blocks carry no
//! meaning.

use ndarray::{s, Array2};
use serde::Serialize;

use crate::constants::{EMBEDDING_DEPTH_OFFSET, MIN_EMBEDDING_DEPTH};
use crate::error::StrassenError;
use crate::matrix_ops::check_square;
use crate::matrix_types::{Matrix, MatrixView};

/// A synthetic size `size = base_size · 2^depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Embedding {
    /// Recursion stops at this dimension (`m`).
    pub base_size: usize,
    /// Number of halvings from `size` to `base_size` (`k`).
    pub depth: u32,
    /// `m · 2^k`.
    pub size: usize,
}

impl Embedding {
    /// Use `m` and `k` as given.
    ///
    /// Rejects sizes whose `size × size` array of `f64` cannot be addressed,
    /// so every accepted embedding can at least be described by an ndarray
    /// shape.
    pub fn explicit(base_size: usize, depth: u32) -> Result<Self, StrassenError> {
        if base_size == 0 {
            return Err(StrassenError::InvalidConfig(
                "base size must be at least 1".into(),
            ));
        }
        let size = 1usize
            .checked_shl(depth)
            .and_then(|scale| base_size.checked_mul(scale))
            .ok_or_else(|| {
                StrassenError::InvalidConfig(format!(
                    "{base_size} * 2^{depth} does not fit in a matrix dimension"
                ))
            })?;
        let addressable = size
            .checked_mul(size)
            .and_then(|elements| elements.checked_mul(std::mem::size_of::<f64>()))
            .is_some_and(|bytes| isize::try_from(bytes).is_ok());
        if !addressable {
            return Err(StrassenError::InvalidConfig(format!(
                "a {size}x{size} matrix is too large to allocate"
            )));
        }
        Ok(Self {
            base_size,
            depth,
            size,
        })
    }
}

/// Pick an embedding for a true size `n`.
///
/// `k = max(floor(log2 n) - 4, 1)` keeps the base blocks near 16-32 wide for
/// large `n`; `m = floor(n / 2^k) + 1` is then the smallest base with
/// `m · 2^k > n`. Small `n` get a larger `m` than strictly needed.
pub fn derive_embedding(n: usize) -> Result<Embedding, StrassenError> {
    if n == 0 {
        return Err(StrassenError::InvalidConfig(
            "matrix size must be at least 1".into(),
        ));
    }
    let depth = n
        .ilog2()
        .saturating_sub(EMBEDDING_DEPTH_OFFSET)
        .max(MIN_EMBEDDING_DEPTH);
    let base_size = (n >> depth) + 1;
    Embedding::explicit(base_size, depth)
}

/// Number of halvings taking `dim` to exactly `base`, if any.
#[must_use]
pub fn depth_for(dim: usize, base: usize) -> Option<u32> {
    if base == 0 {
        return None;
    }
    let mut d = dim;
    let mut depth = 0;
    while d > base {
        if d % 2 != 0 {
            return None;
        }
        d /= 2;
        depth += 1;
    }
    (d == base).then_some(depth)
}

/// Embed `m` into the top-left corner of a `size × size` identity.
pub fn pad(m: MatrixView<'_>, size: usize) -> Result<Matrix, StrassenError> {
    let dim = check_square(&m)?;
    if size < dim {
        return Err(StrassenError::PaddingTooSmall { target: size, dim });
    }
    let mut padded = Array2::eye(size);
    padded.slice_mut(s![..dim, ..dim]).assign(&m);
    Ok(padded)
}

/// The meaningful `n × n` corner of a padded product.
pub fn top_left(m: MatrixView<'_>, n: usize) -> Result<MatrixView<'_>, StrassenError> {
    let dim = check_square(&m)?;
    if n > dim {
        return Err(StrassenError::BlockTooLarge { block: n, dim });
    }
    Ok(m.slice_move(s![..n, ..n]))
}
