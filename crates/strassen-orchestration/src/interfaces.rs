//! Orchestration interfaces.

use serde::Serialize;

use strassen_core::complexity::{naive_counts, Advantage, OperationCounts};
use strassen_core::embedding::Embedding;

/// Trait for presenting run reports to the user.
pub trait ReportPresenter {
    /// Present a finished, verified run.
    fn present_report(&self, report: &RunReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Outcome of one verified, counted multiplication.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Size the Strassen recursion ran at (`m · 2^k`).
    pub size: usize,
    /// Size of the original inputs. Equal to `size` unless embedded.
    pub true_size: usize,
    /// Whether the inputs were identity-padded.
    pub embedded: bool,
    pub embedding: Embedding,
    /// Operations the Strassen product performed.
    pub counts: OperationCounts,
    /// Naive counts for `true_size`.
    pub baseline: OperationCounts,
    pub advantage: Advantage,
    /// Largest absolute deviation from the direct product.
    pub max_error: f64,
}

impl RunReport {
    #[must_use]
    pub fn new(
        embedding: Embedding,
        true_size: usize,
        counts: OperationCounts,
        max_error: f64,
    ) -> Self {
        let baseline = naive_counts(true_size);
        Self {
            size: embedding.size,
            true_size,
            embedded: true_size != embedding.size,
            embedding,
            counts,
            baseline,
            advantage: Advantage::between(baseline, counts),
            max_error,
        }
    }

    /// Entries of the true-size matrix.
    #[must_use]
    pub fn elements(&self) -> u128 {
        let n = self.true_size as u128;
        n * n
    }
}
