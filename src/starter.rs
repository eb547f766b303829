//! The primary operation. A stub: logs its options and reports success.
//!
//! Replace the body of [`starter`] with real business logic when cloning
//! this scaffold. The CLI layer only depends on the
//! `StarterOptions -> StarterResult` contract.

use tracing::info;

use crate::types::{StarterOptions, StarterResult};

/// Run the starter operation.
pub fn starter(options: &StarterOptions) -> StarterResult {
    info!(?options, "starter initialized");
    StarterResult::ok("Starter completed successfully")
}

/// Async variant of [`starter`]. Same contract, awaitable.
pub async fn starter_async(options: &StarterOptions) -> StarterResult {
    starter(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_reports_success() {
        let result = starter(&StarterOptions::default());

        assert!(result.success);
        assert_eq!(
            result.message.as_deref(),
            Some("Starter completed successfully")
        );
    }

    #[tokio::test]
    async fn starter_async_matches_sync_contract() {
        let options = StarterOptions {
            input: Some("./src".to_string()),
            ..StarterOptions::default()
        };

        let result = starter_async(&options).await;

        assert!(result.success);
    }
}
