//! CLI-level errors

use thiserror::Error;

use crate::exitcode;

/// Errors the CLI layer reports directly to the user, with their exit codes.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("参数解析错误: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
        }
    }
}
