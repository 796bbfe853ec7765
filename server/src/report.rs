//! Error-reporting pipeline.
//!
//! Store failures are answered locally by the handlers and, in addition,
//! handed to an `ErrorReporter` for logging or monitoring. The reporter is
//! injected through `AppState`; `TracingReporter` is what the binary uses.

use todo_core::StoreError;
use tracing::error;

/// Process-wide sink for store failures.
pub trait ErrorReporter: Send + Sync + 'static {
    /// `operation` is the name of the handler that hit the failure.
    fn report(&self, operation: &'static str, error: &StoreError);
}

/// Emits every failure as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: &'static str, err: &StoreError) {
        error!(operation, error = %err, "store operation failed");
    }
}
