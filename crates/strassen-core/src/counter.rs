//! Operation counter: performs the two primitive matrix operations and meters
//! them in scalar-operation units.

use std::sync::Arc;

use crate::complexity::OperationCounts;
use crate::error::StrassenError;
use crate::matrix_ops::{add, check_square_pair, direct_multiply};
use crate::matrix_types::{Matrix, MatrixView};
use crate::observer::{OperationEvent, OperationKind, OperationObserver};
use crate::observers::LoggingObserver;
use crate::strassen::strassen_step;

/// Accounting capability threaded through the Strassen recursion.
///
/// Every multiply and add the algorithm performs goes through one of these
/// methods; negation is free and happens outside.
pub trait CountedOps {
    /// Dimension at which the recursion stops.
    fn base_size(&self) -> usize;

    /// Multiply two equal square matrices, recursing above the base size.
    fn counted_multiply(
        &mut self,
        a: MatrixView<'_>,
        b: MatrixView<'_>,
    ) -> Result<Matrix, StrassenError>;

    /// Add two equal square matrices.
    fn counted_add(&mut self, a: MatrixView<'_>, b: MatrixView<'_>)
        -> Result<Matrix, StrassenError>;
}

/// Counter for one top-level multiplication.
///
/// Counts only grow. Create a fresh counter per top-level call and read
/// [`counts`](Self::counts) once it returns.
pub struct OperationCounter {
    counts: OperationCounts,
    base_size: usize,
    verbose: bool,
    observer: Arc<dyn OperationObserver>,
}

impl OperationCounter {
    /// Create a counter recursing down to `base_size`. When `verbose` is set
    /// every increment is reported to the observer, which logs through
    /// `tracing` unless replaced with [`with_observer`](Self::with_observer).
    #[must_use]
    pub fn new(base_size: usize, verbose: bool) -> Self {
        Self {
            counts: OperationCounts::default(),
            base_size,
            verbose,
            observer: Arc::new(LoggingObserver::new()),
        }
    }

    /// Replace the observer receiving verbose events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn OperationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Counts accumulated so far.
    #[must_use]
    pub fn counts(&self) -> OperationCounts {
        self.counts
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn record(&mut self, kind: OperationKind, count: u64, dim: usize) {
        match kind {
            OperationKind::Multiplication => self.counts.multiplications += count,
            OperationKind::Addition => self.counts.additions += count,
        }
        if self.verbose {
            self.observer
                .on_operation(&OperationEvent::new(kind, count, dim));
        }
    }
}

impl CountedOps for OperationCounter {
    fn base_size(&self) -> usize {
        self.base_size
    }

    fn counted_multiply(
        &mut self,
        a: MatrixView<'_>,
        b: MatrixView<'_>,
    ) -> Result<Matrix, StrassenError> {
        let dim = check_square_pair(&a, &b)?;
        if dim != self.base_size {
            return strassen_step(a, b, self);
        }

        let d = dim as u64;
        self.record(OperationKind::Multiplication, d.pow(3), dim);
        self.record(OperationKind::Addition, d * d * (d - 1), dim);
        Ok(direct_multiply(a, b))
    }

    fn counted_add(
        &mut self,
        a: MatrixView<'_>,
        b: MatrixView<'_>,
    ) -> Result<Matrix, StrassenError> {
        let dim = check_square_pair(&a, &b)?;
        let d = dim as u64;
        self.record(OperationKind::Addition, d * d, dim);
        Ok(add(a, b))
    }
}
