//! rsstart - library/CLI starter scaffold.
//!
//! The functional core ([`starter`] / [`starter_async`]) is a stub meant to be
//! replaced when this scaffold is cloned into a real project. What is meant
//! for reuse as-is:
//!
//! - [`guard`]: wrappers that degrade fallible operations to a fallback value
//!   instead of unwinding the caller, plus a classifier mapping raw failures
//!   to user-facing categories with remediation suggestions.
//! - [`cli`]: command dispatch with an explicit capability bundle, so every
//!   piece of the parse -> route -> execute -> report -> exit pipeline is
//!   substitutable in tests.

pub mod cli;
pub mod diagnostics;
pub mod errors;
pub mod exitcode;
pub mod guard;
pub mod starter;
pub mod types;
pub mod util;

pub use errors::StarterError;
pub use starter::{starter, starter_async};
pub use types::{StarterOptions, StarterResult};
