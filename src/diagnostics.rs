//! Environment-driven diagnostics mode.
//!
//! Two external switches enable extra output on failure paths: the `DEBUG`
//! env var (any value) or `RSSTART_ENV=development`. Read at the point of
//! use, never cached, so a mode change mid-process takes effect immediately.

use std::env;

/// Whether diagnostics mode is currently enabled.
pub fn enabled() -> bool {
    env::var_os("DEBUG").is_some()
        || env::var("RSSTART_ENV").map(|v| v == "development").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test fn: parallel test threads must not race on the env vars.
    #[test]
    fn either_switch_toggles_diagnostics_mode() {
        env::remove_var("DEBUG");
        env::remove_var("RSSTART_ENV");
        assert!(!enabled());

        env::set_var("DEBUG", "1");
        assert!(enabled());
        env::remove_var("DEBUG");

        env::set_var("RSSTART_ENV", "development");
        assert!(enabled());

        env::set_var("RSSTART_ENV", "production");
        assert!(!enabled());
        env::remove_var("RSSTART_ENV");
    }
}
