//! Operation counts: naive baselines, closed-form Strassen predictions, and
//! the advantage between them.

use serde::Serialize;

use crate::constants::{ADDITIONS_PER_STEP, PRODUCTS_PER_STEP};

/// Scalar multiplications and additions performed by a computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperationCounts {
    pub multiplications: u64,
    pub additions: u64,
}

impl OperationCounts {
    #[must_use]
    pub fn new(multiplications: u64, additions: u64) -> Self {
        Self {
            multiplications,
            additions,
        }
    }

    /// Multiplications plus additions.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.multiplications + self.additions
    }
}

/// Counts of the classical product of two `n × n` matrices:
/// `n³` multiplications and `n²(n-1)` additions.
#[must_use]
pub fn naive_counts(n: usize) -> OperationCounts {
    let n = n as u64;
    OperationCounts::new(n.pow(3), n * n * n.saturating_sub(1))
}

/// Counts a Strassen multiplication of size `base · 2^depth` must produce
/// when it recurses down to `base`.
///
/// `mul(k) = 7^k · base³` and `add(k) = 7 · add(k-1) + 18 · (base · 2^(k-1))²`
/// with `add(0) = base²(base - 1)`.
#[must_use]
pub fn predict_counts(base: usize, depth: u32) -> OperationCounts {
    let mut counts = naive_counts(base);
    let mut half = base as u64;
    for _ in 0..depth {
        counts.multiplications *= PRODUCTS_PER_STEP;
        counts.additions = PRODUCTS_PER_STEP * counts.additions + ADDITIONS_PER_STEP * half * half;
        half *= 2;
    }
    counts
}

/// Baseline minus actual, per operation kind. Negative means Strassen did
/// more work than the naive product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advantage {
    pub multiplications: i128,
    pub additions: i128,
    pub total: i128,
}

impl Advantage {
    #[must_use]
    pub fn between(baseline: OperationCounts, actual: OperationCounts) -> Self {
        let multiplications = i128::from(baseline.multiplications) - i128::from(actual.multiplications);
        let additions = i128::from(baseline.additions) - i128::from(actual.additions);
        Self {
            multiplications,
            additions,
            total: multiplications + additions,
        }
    }
}
