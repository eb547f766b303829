//! Library-level error type

use thiserror::Error;

use crate::guard::ErrorContext;

/// Starter domain error: a message plus a machine-readable code, optionally
/// annotated with the context the failing operation was attempted in.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StarterError {
    pub message: String,
    pub code: String,
    pub context: Option<ErrorContext>,
}

impl StarterError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            context: None,
        }
    }

    /// Attach the context the operation was attempted in (diagnostics only).
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }
}
