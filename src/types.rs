//! Core records passed between the CLI layer and the starter operation.
//!
//! Everything here is constructed once per invocation and never mutated.

use serde::{Deserialize, Serialize};

/// Options for a starter run.
///
/// The CLI parser supplies the `output` default; `Default` supplies the same
/// one for programmatic use so downstream code never has to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StarterOptions {
    /// Input file or path to process
    pub input: Option<String>,
    /// Output directory
    pub output: String,
    /// Enable verbose output
    pub verbose: bool,
    /// Preview mode: report planned actions without performing them
    pub dry_run: bool,
}

impl Default for StarterOptions {
    fn default() -> Self {
        Self {
            input: None,
            output: ".".to_string(),
            verbose: false,
            dry_run: false,
        }
    }
}

/// Outcome of a starter run.
///
/// `message` is optional on both the success and failure path; formatting
/// must not assume it is present either way.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StarterResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl StarterResult {
    /// Successful result with a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failed result with a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
