//! Failure type for the document store.
//!
//! # Design
//! Absence is not an error: lookups report it through `Lookup::NotFound`.
//! Everything that goes wrong inside the store itself (an identifier that
//! does not parse, an unreadable data file, a failed write) collapses into a
//! single `StoreError` carrying a message. Callers never branch on the cause.

use thiserror::Error;

/// A store operation failed. The message is safe to show to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
