//! Strassen's 7-multiplication recursive product.
//!
//! ```text
//! S1 = (A11+A22) * (B11+B22)      C11 = S1 + S4 - S5 + S7
//! S2 = (A21+A22) * B11            C21 = S2 + S4
//! S3 = A11 * (B12-B22)            C12 = S3 + S5
//! S4 = A22 * (B21-B11)            C22 = S1 + S3 - S2 + S6
//! S5 = (A11+A12) * B22
//! S6 = (A21-A11) * (B11+B12)
//! S7 = (A12-A22) * (B21+B22)
//! ```
//!
//! Every `+`, `-` and `*` goes through [`CountedOps`]. Subtraction is an
//! addition of a negated operand, and negation is not counted.

use std::sync::Arc;

use tracing::trace;

use crate::complexity::OperationCounts;
use crate::counter::{CountedOps, OperationCounter};
use crate::embedding::depth_for;
use crate::error::StrassenError;
use crate::matrix_ops::{assemble, check_square_pair, negate};
use crate::matrix_types::{Matrix, MatrixView, Quadrants};
use crate::observer::OperationObserver;
use crate::observers::LoggingObserver;

/// Multiply `a` and `b` with Strassen's scheme, metering every operation in `ops`.
///
/// The common dimension must be `ops.base_size() · 2^k` for some `k ≥ 0`.
/// At the base size this is a single counted direct product.
pub fn strassen_multiply<C: CountedOps + ?Sized>(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    ops: &mut C,
) -> Result<Matrix, StrassenError> {
    let dim = check_square_pair(&a, &b)?;
    let base = ops.base_size();
    if depth_for(dim, base).is_none() {
        return Err(StrassenError::UnreachableBase { dim, base });
    }

    if dim == base {
        ops.counted_multiply(a, b)
    } else {
        strassen_step(a, b, ops)
    }
}

/// One level of the recursion. The seven products call back into
/// `ops.counted_multiply`, which recurses until the base size.
pub(crate) fn strassen_step<C: CountedOps + ?Sized>(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    ops: &mut C,
) -> Result<Matrix, StrassenError> {
    let dim = check_square_pair(&a, &b)?;
    let base = ops.base_size();
    if dim % 2 != 0 || dim / 2 < base {
        return Err(StrassenError::UnreachableBase { dim, base });
    }
    trace!(dim, base, "strassen step");

    let a = Quadrants::split(a);
    let b = Quadrants::split(b);

    let l = ops.counted_add(a.q11, a.q22)?;
    let r = ops.counted_add(b.q11, b.q22)?;
    let s1 = ops.counted_multiply(l.view(), r.view())?;

    let l = ops.counted_add(a.q21, a.q22)?;
    let s2 = ops.counted_multiply(l.view(), b.q11)?;

    let r = counted_sub(ops, b.q12, b.q22)?;
    let s3 = ops.counted_multiply(a.q11, r.view())?;

    let r = counted_sub(ops, b.q21, b.q11)?;
    let s4 = ops.counted_multiply(a.q22, r.view())?;

    let l = ops.counted_add(a.q11, a.q12)?;
    let s5 = ops.counted_multiply(l.view(), b.q22)?;

    let l = counted_sub(ops, a.q21, a.q11)?;
    let r = ops.counted_add(b.q11, b.q12)?;
    let s6 = ops.counted_multiply(l.view(), r.view())?;

    let l = counted_sub(ops, a.q12, a.q22)?;
    let r = ops.counted_add(b.q21, b.q22)?;
    let s7 = ops.counted_multiply(l.view(), r.view())?;

    // C11 = (S1 + S4) + (S7 - S5)
    let l = ops.counted_add(s1.view(), s4.view())?;
    let r = counted_sub(ops, s7.view(), s5.view())?;
    let c11 = ops.counted_add(l.view(), r.view())?;

    let c21 = ops.counted_add(s2.view(), s4.view())?;
    let c12 = ops.counted_add(s3.view(), s5.view())?;

    // C22 = (S1 + S3) + (S6 - S2)
    let l = ops.counted_add(s1.view(), s3.view())?;
    let r = counted_sub(ops, s6.view(), s2.view())?;
    let c22 = ops.counted_add(l.view(), r.view())?;

    assemble(&c11, &c12, &c21, &c22)
}

fn counted_sub<C: CountedOps + ?Sized>(
    ops: &mut C,
    a: MatrixView<'_>,
    b: MatrixView<'_>,
) -> Result<Matrix, StrassenError> {
    ops.counted_add(a, negate(b).view())
}

/// Convenience front end: owns the configuration and creates a fresh
/// [`OperationCounter`] for every product.
pub struct StrassenMultiplier {
    base_size: usize,
    verbose: bool,
    observer: Arc<dyn OperationObserver>,
}

impl StrassenMultiplier {
    #[must_use]
    pub fn new(base_size: usize) -> Self {
        Self {
            base_size,
            verbose: false,
            observer: Arc::new(LoggingObserver::new()),
        }
    }

    /// Report every counted operation to the observer.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn OperationObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn base_size(&self) -> usize {
        self.base_size
    }

    /// Multiply `a` by `b`, returning the product and the operations it took.
    pub fn multiply(
        &self,
        a: MatrixView<'_>,
        b: MatrixView<'_>,
    ) -> Result<(Matrix, OperationCounts), StrassenError> {
        let mut counter = OperationCounter::new(self.base_size, self.verbose)
            .with_observer(Arc::clone(&self.observer));
        let product = strassen_multiply(a, b, &mut counter)?;
        Ok((product, counter.counts()))
    }
}
