// ABOUTME: Tests for ParameterSchema - validation, defaults, and the
// ABOUTME: falsy-counts-as-absent substitution rule.

use serde_json::{json, Map};

use super::*;
use crate::error::ToolError;

fn schema() -> ParameterSchema {
    ParameterSchema::new()
        .param(
            ParamSpec::optional("location", ParamKind::String, "City name")
                .with_default("New York"),
        )
        .param(ParamSpec::required("count", ParamKind::Number, "How many"))
}

fn args(value: serde_json::Value) -> Map<String, serde_json::Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_valid_arguments_pass_through() {
    let resolved = schema()
        .resolve(&args(json!({ "location": "Paris", "count": 3 })))
        .unwrap();

    assert_eq!(resolved["location"], "Paris");
    assert_eq!(resolved["count"], 3);
}

#[test]
fn test_default_applied_for_missing_optional() {
    let resolved = schema().resolve(&args(json!({ "count": 1 }))).unwrap();
    assert_eq!(resolved["location"], "New York");
}

#[test]
fn test_empty_string_counts_as_absent() {
    let resolved = schema()
        .resolve(&args(json!({ "location": "", "count": 1 })))
        .unwrap();
    assert_eq!(resolved["location"], "New York");
}

#[test]
fn test_null_counts_as_absent() {
    let resolved = schema()
        .resolve(&args(json!({ "location": null, "count": 1 })))
        .unwrap();
    assert_eq!(resolved["location"], "New York");
}

#[test]
fn test_missing_required_rejected() {
    let err = schema().resolve(&args(json!({}))).unwrap_err();
    match err {
        ToolError::InvalidArgument(msg) => assert!(msg.contains("count")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_wrong_type_rejected() {
    let err = schema()
        .resolve(&args(json!({ "count": "three" })))
        .unwrap_err();
    match err {
        ToolError::InvalidArgument(msg) => {
            assert!(msg.contains("count"));
            assert!(msg.contains("number"));
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_unknown_parameters_ignored() {
    let resolved = schema()
        .resolve(&args(json!({ "count": 1, "verbose": true })))
        .unwrap();
    assert!(!resolved.contains_key("verbose"));
}

#[test]
fn test_optional_without_default_stays_absent() {
    let schema = ParameterSchema::new().param(ParamSpec::optional(
        "note",
        ParamKind::String,
        "Optional note",
    ));
    let resolved = schema.resolve(&Map::new()).unwrap();
    assert!(resolved.is_empty());
}

#[test]
fn test_to_json_shape() {
    let value = schema().to_json();

    assert_eq!(value["type"], "object");
    assert_eq!(value["properties"]["location"]["type"], "string");
    assert_eq!(value["properties"]["count"]["type"], "number");
    assert_eq!(value["required"], json!(["count"]));
}
