//! Observer pattern for per-operation reporting.
//!
//! An [`OperationCounter`](crate::counter::OperationCounter) in verbose mode
//! hands every counted step to its observer as an [`OperationEvent`].

use std::fmt;

/// Kind of scalar operation being metered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Multiplication,
    Addition,
}

impl OperationKind {
    /// Plural noun used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Multiplication => "multiplications",
            Self::Addition => "additions",
        }
    }
}

/// One increment of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationEvent {
    /// Which counter grew.
    pub kind: OperationKind,
    /// Scalar operations added by this step.
    pub count: u64,
    /// Dimension of the matrices involved.
    pub dim: usize,
}

impl OperationEvent {
    #[must_use]
    pub fn new(kind: OperationKind, count: u64, dim: usize) -> Self {
        Self { kind, count, dim }
    }
}

impl fmt::Display for OperationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+ {} {}", self.count, self.kind.label())
    }
}

/// Receives operation events from a verbose counter.
pub trait OperationObserver: Send + Sync {
    /// Receive one event.
    fn on_operation(&self, event: &OperationEvent);
}
