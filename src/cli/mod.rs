//! CLI layer: argument parsing, capability bundle, dispatch, and output
//! formatting. The only layer that knows about terminals; process exit
//! itself stays in `main.rs`.

pub mod args;
pub mod commands;
pub mod deps;
pub mod error;
pub mod output;

pub use args::{parse_args, Cli, ParsedCommand};
pub use commands::{dispatch, execute_run, main_with, DispatchOutcome};
pub use deps::{Console, Deps, Runner, StarterRunner, StdConsole};
pub use error::{CliError, CliResult};
