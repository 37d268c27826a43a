//! Workspace-level integration tests for the Strassen operation counter.
//!
//! The tests live in `tests/`; this crate has no library code of its own.
