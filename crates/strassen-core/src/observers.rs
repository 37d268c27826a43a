//! Concrete observer implementations.

use std::sync::Mutex;

use tracing::debug;

use crate::observer::{OperationEvent, OperationObserver};

/// Observer that logs each event through `tracing`.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationObserver for LoggingObserver {
    fn on_operation(&self, event: &OperationEvent) {
        debug!(
            kind = event.kind.label(),
            count = event.count,
            dim = event.dim,
            "counted operation"
        );
    }
}

/// Null object pattern: discards every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationObserver for NoOpObserver {
    fn on_operation(&self, _event: &OperationEvent) {
        // Intentionally empty
    }
}

/// Observer that keeps every event it receives, in order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<OperationEvent>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events seen so far.
    #[must_use]
    pub fn events(&self) -> Vec<OperationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl OperationObserver for RecordingObserver {
    fn on_operation(&self, event: &OperationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(*event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::OperationKind;

    #[test]
    fn noop_observer_does_nothing() {
        let observer = NoOpObserver::new();
        observer.on_operation(&OperationEvent::new(OperationKind::Addition, 1, 1));
    }

    #[test]
    fn logging_observer_does_not_panic() {
        let observer = LoggingObserver::default();
        observer.on_operation(&OperationEvent::new(OperationKind::Multiplication, 8, 2));
    }

    #[test]
    fn recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.on_operation(&OperationEvent::new(OperationKind::Multiplication, 8, 2));
        observer.on_operation(&OperationEvent::new(OperationKind::Addition, 4, 2));

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, OperationKind::Multiplication);
        assert_eq!(events[1].count, 4);
    }
}
