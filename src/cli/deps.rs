//! Capability bundle for the dispatcher.
//!
//! The dispatcher never resolves collaborators ambiently. The argument
//! parser, the primary operation, the error classifier, the output channels,
//! and the diagnostics switch all arrive through [`Deps`], so every dispatch
//! operation stays substitutable in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::args::{parse_args, ParsedCommand};
use crate::cli::error::CliError;
use crate::diagnostics;
use crate::guard::classify::{classify, ClassifiedError};
use crate::starter::starter_async;
use crate::types::{StarterOptions, StarterResult};

/// Output channel abstraction.
pub trait Console: Send + Sync {
    /// Write one line to standard output.
    fn out(&self, msg: &str);

    /// Write one line to standard error.
    fn err(&self, msg: &str);
}

/// Real console backed by stdout/stderr.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn out(&self, msg: &str) {
        println!("{msg}");
    }

    fn err(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// The primary-operation boundary: given options, produce a result.
/// Implementations report failure through `StarterResult::success`, they do
/// not raise.
#[async_trait]
pub trait Runner: Send + Sync {
    async fn run(&self, options: &StarterOptions) -> StarterResult;
}

/// Real runner delegating to [`starter_async`].
#[derive(Debug, Default)]
pub struct StarterRunner;

#[async_trait]
impl Runner for StarterRunner {
    async fn run(&self, options: &StarterOptions) -> StarterResult {
        starter_async(options).await
    }
}

pub type ParseFn = fn(&[String]) -> Result<ParsedCommand, CliError>;
pub type ClassifyFn = fn(&anyhow::Error) -> ClassifiedError;
pub type DiagnosticsFn = fn() -> bool;

/// Everything the dispatcher depends on.
pub struct Deps {
    pub parse: ParseFn,
    pub runner: Arc<dyn Runner>,
    pub console: Arc<dyn Console>,
    pub classify: ClassifyFn,
    pub diagnostics: DiagnosticsFn,
}

impl Deps {
    /// Create the bundle with real implementations.
    pub fn new() -> Self {
        Self::with_deps(
            parse_args,
            Arc::new(StarterRunner),
            Arc::new(StdConsole),
            classify,
            diagnostics::enabled,
        )
    }

    /// Create the bundle with custom implementations (for testing).
    pub fn with_deps(
        parse: ParseFn,
        runner: Arc<dyn Runner>,
        console: Arc<dyn Console>,
        classify: ClassifyFn,
        diagnostics: DiagnosticsFn,
    ) -> Self {
        Self {
            parse,
            runner,
            console,
            classify,
            diagnostics,
        }
    }
}

impl Default for Deps {
    fn default() -> Self {
        Self::new()
    }
}
