// ABOUTME: Tests for ToolResult - constructors, error conversion, and the
// ABOUTME: wire shape of the envelope.

use serde_json::json;

use super::*;
use crate::error::ToolError;

#[test]
fn test_ok_result() {
    let result = ToolResult::ok(json!({ "value": 42 }), "done");

    assert!(result.success);
    assert_eq!(result.data.unwrap()["value"], 42);
    assert_eq!(result.message, "done");
    assert!(result.error_kind.is_none());
}

#[test]
fn test_failure_result() {
    let result = ToolResult::failure(ErrorKind::NotFound, "unknown tool 'x'");

    assert!(!result.success);
    assert!(result.data.is_none());
    assert_eq!(result.error_kind, Some(ErrorKind::NotFound));
}

#[test]
fn test_from_tool_error() {
    let result = ToolResult::from(ToolError::InvalidArgument("bad".into()));
    assert_eq!(result.error_kind, Some(ErrorKind::InvalidArgument));
    assert!(result.message.contains("bad"));

    let result = ToolResult::from(ToolError::Handler(anyhow::anyhow!("boom")));
    assert_eq!(result.error_kind, Some(ErrorKind::HandlerFailure));
}

#[test]
fn test_success_serialization_omits_error_kind() {
    let value = serde_json::to_value(ToolResult::ok(json!({}), "ok")).unwrap();

    assert_eq!(value["success"], true);
    assert!(value.get("errorKind").is_none());
}

#[test]
fn test_failure_serialization_omits_data() {
    let value =
        serde_json::to_value(ToolResult::failure(ErrorKind::HandlerFailure, "boom")).unwrap();

    assert_eq!(value["success"], false);
    assert_eq!(value["errorKind"], "HandlerFailure");
    assert!(value.get("data").is_none());
}
