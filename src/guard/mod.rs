//! Guarded operations: every fallible unit of work wrapped here degrades to a
//! caller-supplied fallback value instead of unwinding the caller.
//!
//! Failures are fully absorbed - no function in this module has a failure
//! mode visible to callers. When diagnostics mode is on
//! (see [`crate::diagnostics`]), each absorbed failure leaves a single
//! `warn!` line behind as the diagnostic trail.

pub mod classify;

pub use classify::{classify, ClassifiedError, ErrorKind};

use std::fmt::Display;
use std::future::Future;
use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::diagnostics;

/// Why an operation was attempted. Diagnostics only - never drives control
/// flow. Constructed fresh per call site.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation label (free text)
    pub operation: String,
    /// File the operation concerned, if any
    pub file_path: Option<PathBuf>,
    /// Open-ended extra details
    pub details: Option<serde_json::Value>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            file_path: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Diagnostics-mode check happens here, at failure time, not at wrap time.
fn log_failure(context: &ErrorContext, message: &str) {
    if !diagnostics::enabled() {
        return;
    }
    match &context.file_path {
        Some(path) => warn!(
            "[{}] 操作失败: {} 文件: {}",
            context.operation,
            message,
            path.display()
        ),
        None => warn!("[{}] 操作失败: {}", context.operation, message),
    }
}

/// Run a synchronous operation; on failure return `fallback`.
pub fn guard_sync<T, E, F>(operation: F, context: &ErrorContext, fallback: T) -> T
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    match operation() {
        Ok(value) => value,
        Err(e) => {
            log_failure(context, &e.to_string());
            fallback
        }
    }
}

/// Await an asynchronous operation; on failure return `fallback`.
///
/// The only suspension point is the awaited operation itself.
pub async fn guard_async<T, E, Fut>(operation: Fut, context: &ErrorContext, fallback: T) -> T
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    match operation.await {
        Ok(value) => value,
        Err(e) => {
            log_failure(context, &e.to_string());
            fallback
        }
    }
}

/// Read a file to a string; a missing or unreadable file is a normal outcome
/// (`None`), not an error.
pub async fn guard_read_file(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    let context = ErrorContext::new("文件读取").with_file_path(path);
    guard_async(
        async { tokio::fs::read_to_string(path).await.map(Some) },
        &context,
        None,
    )
    .await
}

/// Parse JSON; malformed or empty input yields `None`.
pub fn guard_parse_json<T: DeserializeOwned>(content: &str, context: &ErrorContext) -> Option<T> {
    let context = ErrorContext {
        operation: format!("{} - JSON解析", context.operation),
        file_path: context.file_path.clone(),
        details: context.details.clone(),
    };
    guard_sync(|| serde_json::from_str(content).map(Some), &context, None)
}

/// One unit of a [`guard_batch`] call: an async operation with its context
/// and fallback.
pub struct BatchEntry<'a, T> {
    operation: BoxFuture<'a, anyhow::Result<T>>,
    context: ErrorContext,
    fallback: T,
}

impl<'a, T> BatchEntry<'a, T> {
    pub fn new<Fut>(operation: Fut, context: ErrorContext, fallback: T) -> Self
    where
        Fut: Future<Output = anyhow::Result<T>> + Send + 'a,
    {
        Self {
            operation: operation.boxed(),
            context,
            fallback,
        }
    }
}

/// Run guarded operations one at a time, in input order.
///
/// Entries are independent: one failure never affects another entry's outcome.
/// `result[i]` always corresponds to `entries[i]` so callers can correlate
/// positionally. Deliberately sequential, not parallel - batches are small
/// and deterministic output order matters more than throughput.
pub async fn guard_batch<T>(entries: Vec<BatchEntry<'_, T>>) -> Vec<T> {
    let mut results = Vec::with_capacity(entries.len());
    for entry in entries {
        results.push(guard_async(entry.operation, &entry.context, entry.fallback).await);
    }
    results
}
