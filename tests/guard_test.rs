//! Tests for the guarded-operation wrappers

use std::{env, io};

use anyhow::anyhow;
use tempfile::TempDir;

use rsstart::util::testing;

use rsstart::guard::{
    guard_async, guard_batch, guard_parse_json, guard_read_file, guard_sync, BatchEntry,
    ErrorContext,
};

#[ctor::ctor]
fn init() {
    rsstart::util::testing::init_test_setup();
}

// ============================================================
// guard_sync
// ============================================================

#[test]
fn given_succeeding_op_when_guard_sync_then_returns_its_value() {
    // Arrange
    let ctx = ErrorContext::new("测试操作");

    // Act
    let value = guard_sync(|| Ok::<_, io::Error>(42), &ctx, 0);

    // Assert
    assert_eq!(value, 42);
}

#[test]
fn given_failing_op_when_guard_sync_then_returns_fallback() {
    let ctx = ErrorContext::new("测试操作");

    let value = guard_sync(
        || Err::<i32, _>(io::Error::new(io::ErrorKind::Other, "boom")),
        &ctx,
        7,
    );

    assert_eq!(value, 7);
}

#[test]
fn given_context_with_file_path_when_op_fails_then_fallback_still_returned() {
    let ctx = ErrorContext::new("文件处理").with_file_path("/tmp/nope.txt");

    let value = guard_sync(
        || Err::<&str, _>(io::Error::new(io::ErrorKind::NotFound, "enoent")),
        &ctx,
        "fallback",
    );

    assert_eq!(value, "fallback");
}

// Enabled and disabled paths live in one test fn: the env switch is
// process-wide and other test threads must not observe a half-toggled state
// they assert on.
#[test]
fn given_diagnostics_toggled_when_op_fails_then_warn_line_only_when_enabled() {
    // Arrange
    let ctx = ErrorContext::new("文件处理").with_file_path("/tmp/nope.txt");
    env::remove_var("RSSTART_ENV");

    // Act - diagnostics on
    env::set_var("DEBUG", "1");
    let lines = testing::capture_logs(|| {
        let value = guard_sync(
            || Err::<i32, _>(io::Error::new(io::ErrorKind::NotFound, "enoent")),
            &ctx,
            7,
        );
        assert_eq!(value, 7);
    });
    env::remove_var("DEBUG");

    // Assert - exactly one warn line with label, message, and file path
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("[文件处理]"));
    assert!(lines[0].contains("enoent"));
    assert!(lines[0].contains("/tmp/nope.txt"));

    // Act - diagnostics off
    let lines = testing::capture_logs(|| {
        guard_sync(
            || Err::<i32, _>(io::Error::new(io::ErrorKind::NotFound, "enoent")),
            &ctx,
            7,
        );
    });

    // Assert - failure absorbed silently
    assert!(lines.is_empty());
}

// ============================================================
// guard_async
// ============================================================

#[tokio::test]
async fn given_settling_future_when_guard_async_then_returns_its_value() {
    let ctx = ErrorContext::new("测试操作");

    let value = guard_async(
        async { Ok::<_, io::Error>("x".to_string()) },
        &ctx,
        "fb".to_string(),
    )
    .await;

    assert_eq!(value, "x");
}

#[tokio::test]
async fn given_failing_future_when_guard_async_then_returns_fallback() {
    let ctx = ErrorContext::new("测试操作");

    let value = guard_async(
        async { Err::<u32, _>(anyhow!("network down")) },
        &ctx,
        99,
    )
    .await;

    assert_eq!(value, 99);
}

// ============================================================
// guard_read_file
// ============================================================

#[tokio::test]
async fn given_existing_file_when_guard_read_file_then_returns_content() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.txt");
    std::fs::write(&path, "hello world").unwrap();

    // Act
    let content = guard_read_file(&path).await;

    // Assert
    assert_eq!(content, Some("hello world".to_string()));
}

#[tokio::test]
async fn given_missing_file_when_guard_read_file_then_returns_none() {
    let temp = TempDir::new().unwrap();

    let content = guard_read_file(temp.path().join("missing.txt")).await;

    assert_eq!(content, None);
}

// ============================================================
// guard_parse_json
// ============================================================

#[test]
fn given_valid_json_when_guard_parse_json_then_returns_value() {
    let ctx = ErrorContext::new("配置读取");

    let value: Option<serde_json::Value> = guard_parse_json(r#"{"a":1}"#, &ctx);

    assert_eq!(value, Some(serde_json::json!({"a": 1})));
}

#[test]
fn given_empty_input_when_guard_parse_json_then_returns_none() {
    let ctx = ErrorContext::new("配置读取");

    let value: Option<serde_json::Value> = guard_parse_json("", &ctx);

    assert_eq!(value, None);
}

#[test]
fn given_malformed_input_when_guard_parse_json_then_returns_none() {
    let ctx = ErrorContext::new("配置读取");

    let value: Option<serde_json::Value> = guard_parse_json("not json", &ctx);

    assert_eq!(value, None);
}

// ============================================================
// guard_batch
// ============================================================

#[tokio::test]
async fn given_mixed_entries_when_guard_batch_then_results_stay_positional() {
    // Arrange - middle entry fails, neighbors succeed
    let entries = vec![
        BatchEntry::new(
            async { Ok("x".to_string()) },
            ErrorContext::new("first"),
            "f1".to_string(),
        ),
        BatchEntry::new(
            async { Err(anyhow!("boom")) },
            ErrorContext::new("second"),
            "f2".to_string(),
        ),
        BatchEntry::new(
            async { Ok("z".to_string()) },
            ErrorContext::new("third"),
            "f3".to_string(),
        ),
    ];

    // Act
    let results = guard_batch(entries).await;

    // Assert - output order equals input order, failure replaced positionally
    assert_eq!(results, vec!["x", "f2", "z"]);
}

#[tokio::test]
async fn given_empty_input_when_guard_batch_then_returns_empty_output() {
    let entries: Vec<BatchEntry<'static, String>> = vec![];

    let results = guard_batch(entries).await;

    assert!(results.is_empty());
}
