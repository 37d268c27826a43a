//! Observer that prints every counted operation.

use strassen_core::observer::{OperationEvent, OperationObserver};

/// Prints `+ <count> multiplications` / `+ <count> additions` per step.
///
/// Lines go to stdout unless the report itself owns stdout (JSON output),
/// in which case they go to stderr.
pub struct StepPrinter {
    to_stderr: bool,
}

impl StepPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self { to_stderr: false }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self { to_stderr: true }
    }

    pub fn writes_to_stderr(&self) -> bool {
        self.to_stderr
    }
}

impl Default for StepPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationObserver for StepPrinter {
    fn on_operation(&self, event: &OperationEvent) {
        if self.to_stderr {
            eprintln!("{event}");
        } else {
            println!("{event}");
        }
    }
}
