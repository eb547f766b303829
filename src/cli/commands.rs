//! Command dispatch: parse -> route -> execute -> report -> exit decision.

use anyhow::Result;
use colored::Colorize;
use tracing::{debug, instrument};

use crate::cli::args::ParsedCommand;
use crate::cli::deps::Deps;
use crate::cli::output::{format_failure, format_run_result, format_welcome, VERSION};
use crate::errors::StarterError;
use crate::exitcode;
use crate::types::StarterOptions;

/// Terminal value of one dispatch: whether the process should exit, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub should_exit: bool,
    pub exit_code: i32,
}

/// Top-level orchestration: parse argv, dispatch, decide the exit code.
///
/// The single catch boundary. Any failure raised during dispatch (including
/// the escalated run failure from [`execute_run`]) is classified, its parts
/// emitted to stderr in order (headline, suggestions, debug dump), and
/// turned into the fatal exit code. No retries, no partial recovery.
/// `main` applies `std::process::exit` to the returned code.
pub async fn main_with(argv: &[String], deps: &Deps) -> i32 {
    let parsed = match (deps.parse)(argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            deps.console.err(&e.to_string().red().to_string());
            return e.exit_code();
        }
    };

    match dispatch(&parsed, deps).await {
        Ok(outcome) if outcome.should_exit => outcome.exit_code,
        Ok(_) => exitcode::OK,
        Err(e) => {
            let failure = format_failure(&e, deps.classify, deps.diagnostics);
            deps.console.err(&failure.message);
            if let Some(suggestions) = &failure.suggestions {
                deps.console.err(suggestions);
            }
            if let Some(debug_info) = &failure.debug_info {
                deps.console.err(debug_info);
            }
            exitcode::SOFTWARE
        }
    }
}

/// Route a parsed command to its behavior.
#[instrument(skip(deps))]
pub async fn dispatch(command: &ParsedCommand, deps: &Deps) -> Result<DispatchOutcome> {
    match command {
        ParsedCommand::Run(options) => {
            execute_run(options, deps).await?;
            Ok(DispatchOutcome {
                should_exit: false,
                exit_code: exitcode::OK,
            })
        }
        ParsedCommand::Version => {
            deps.console.out(VERSION);
            Ok(DispatchOutcome {
                should_exit: true,
                exit_code: exitcode::OK,
            })
        }
        // Help text was already emitted while parsing.
        ParsedCommand::Help => Ok(DispatchOutcome {
            should_exit: true,
            exit_code: exitcode::OK,
        }),
    }
}

/// Execute the run command and report its outcome.
///
/// A result with `success: false` is escalated into an error carrying the
/// result message, so it reaches the top-level handler. This is the only
/// intentional raise in the dispatcher.
pub async fn execute_run(options: &StarterOptions, deps: &Deps) -> Result<()> {
    if options.verbose {
        deps.console.out(&format_welcome());
    }

    debug!(?options, "invoking starter");
    let result = deps.runner.run(options).await;
    let output = format_run_result(&result);

    if result.success {
        deps.console.out(&output.headline);
        if let Some(details) = &output.details {
            deps.console.out(details);
        }
        Ok(())
    } else {
        deps.console.err(&output.headline);
        if let Some(details) = &output.details {
            deps.console.err(details);
        }
        let message = result.message.unwrap_or_else(|| "操作失败".to_string());
        Err(StarterError::new(message, "RUN_FAILED").into())
    }
}
